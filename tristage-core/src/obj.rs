//! Wavefront OBJ reader for the subset a triangle mesh needs.
//!
//! Reads `v x y z [w]` and `f i j k ...` records. Face corners may carry
//! `/vt/vn` suffixes, which are ignored; negative indices count back from the
//! latest vertex; polygons are fan-triangulated. Every other record is
//! skipped.
use nalgebra::Point3;
use nom::{
    bytes::complete::tag,
    character::complete::{char, digit1, space0, space1},
    combinator::{map_res, opt, recognize},
    multi::many1,
    number::complete::double,
    sequence::{pair, preceded},
    IResult,
};

use crate::error::{Error, Result};
use crate::geometry::{Face, Mesh};

/// Parse OBJ text into a validated mesh.
pub fn parse_obj(input: &str) -> Result<Mesh> {
    let mut vertices = Vec::new();
    let mut faces: Vec<Face> = Vec::new();

    for (line_idx, raw) in input.lines().enumerate() {
        let line_no = line_idx + 1;
        let line = raw.split('#').next().unwrap_or("").trim();

        match line.split_whitespace().next() {
            Some("v") => {
                let vertex = finish(vertex_record(line), line_no)?;
                vertices.push(vertex);
            }
            Some("f") => {
                let corners = finish(face_record(line), line_no)?;
                if corners.len() < 3 {
                    return Err(parse_error(line_no, "face needs at least three corners"));
                }
                let resolved = corners
                    .iter()
                    .map(|&i| resolve_index(i, vertices.len(), line_no))
                    .collect::<Result<Vec<_>>>()?;
                for k in 1..resolved.len() - 1 {
                    faces.push([resolved[0], resolved[k], resolved[k + 1]]);
                }
            }
            _ => {}
        }
    }

    log::debug!("parsed OBJ: {} vertices, {} faces", vertices.len(), faces.len());
    Mesh::new(vertices, faces)
}

fn finish<T>(parsed: IResult<&str, T>, line: usize) -> Result<T> {
    match parsed {
        Ok(("", value)) => Ok(value),
        Ok((rest, _)) => Err(parse_error(line, &format!("unexpected trailing input '{}'", rest))),
        Err(e) => Err(parse_error(line, &format!("{:?}", e))),
    }
}

fn parse_error(line: usize, message: &str) -> Error {
    Error::Parse {
        line,
        message: message.to_string(),
    }
}

/// OBJ indices are 1-based; negative ones are relative to `seen` vertices.
fn resolve_index(index: i64, seen: usize, line: usize) -> Result<usize> {
    let resolved = match index {
        0 => None,
        i if i > 0 => Some(i as usize - 1),
        i => (seen as i64 + i).try_into().ok(),
    };
    resolved.ok_or_else(|| parse_error(line, &format!("invalid vertex index {}", index)))
}

fn vertex_record(input: &str) -> IResult<&str, Point3<f64>> {
    let (input, _) = tag("v")(input)?;
    let (input, x) = preceded(space1, double)(input)?;
    let (input, y) = preceded(space1, double)(input)?;
    let (input, z) = preceded(space1, double)(input)?;
    let (input, _) = opt(preceded(space1, double))(input)?;
    let (input, _) = space0(input)?;
    Ok((input, Point3::new(x, y, z)))
}

fn face_record(input: &str) -> IResult<&str, Vec<i64>> {
    let (input, _) = tag("f")(input)?;
    let (input, corners) = many1(preceded(space1, face_corner))(input)?;
    let (input, _) = space0(input)?;
    Ok((input, corners))
}

fn face_corner(input: &str) -> IResult<&str, i64> {
    let (input, index) = signed_int(input)?;
    let (input, _) = opt(pair(char('/'), opt(signed_int)))(input)?;
    let (input, _) = opt(pair(char('/'), opt(signed_int)))(input)?;
    Ok((input, index))
}

fn signed_int(input: &str) -> IResult<&str, i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), str::parse::<i64>)(input)
}
