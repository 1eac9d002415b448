use std::fs;

use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::{take, tag, take_until};
use nom::character::complete::{digit1, multispace0, space1};
use nom::error::{Error, ErrorKind};
use nom::multi::many0;
use thiserror::Error as ThisError;

use crate::color::VertexId;
use crate::graph::{Graph, GraphError};

/** errors raised while loading a DIMACS instance */
#[derive(ThisError, Debug)]
pub enum DimacsError {
    /// the file could not be read
    #[error("unable to read the instance file: {0}")]
    Io(#[from] std::io::Error),
    /// no usable problem line
    #[error("missing or invalid DIMACS header (expected 'p edge <n> <m>')")]
    BadHeader,
    /// the surviving edge set still violates a graph invariant
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/** reads an instance from a DIMACS file.
out-of-range and self-loop edge lines are dropped with a diagnostic on
stderr, so the resulting graph always satisfies the construction
invariants. */
pub fn read_from_file(filename:&str) -> Result<Graph, DimacsError> {
    let text = fs::read_to_string(filename)?.replace('\r', "");
    parse(&text)
}

/// same as [`read_from_file`], from an in-memory string
pub fn parse(text:&str) -> Result<Graph, DimacsError> {
    let (after_comments,_) = skip_comments(text).map_err(|_| DimacsError::BadHeader)?;
    let (mut rest, (n, m_header)) = read_header(after_comments)
        .map_err(|_| DimacsError::BadHeader)?;
    let mut edges:Vec<(VertexId,VertexId)> = Vec::new();
    let mut nb_dropped = 0;
    while let Ok((tmp,(a,b))) = read_edge(rest) {
        rest = tmp;
        // DIMACS vertices are 1-based
        if a == 0 || b == 0 || a > n || b > n {
            eprintln!("dimacs: dropping edge ({},{}): endpoint outside 1..={}", a, b, n);
            nb_dropped += 1;
        } else if a == b {
            eprintln!("dimacs: dropping self-loop on vertex {}", a);
            nb_dropped += 1;
        } else {
            edges.push((a-1, b-1));
        }
    }
    let nb_read = edges.len() + nb_dropped;
    // some instances list each edge once, some list both directions
    if nb_read != m_header && 2*nb_read != m_header {
        eprintln!("dimacs: header announces {} edges, found {}", m_header, nb_read);
    }
    Ok(Graph::from_edges(n, &edges)?)
}

/// skips a single comment
fn skip_comment(s:&str) -> IResult<&str, &str> {
    let (s,_) = tag("c")(s)?;
    let (s,_) = take_until("\n")(s)?;
    take(1usize)(s)
}

/// skips all comments
pub fn skip_comments(s:&str) -> IResult<&str, Vec<&str>> {
    many0(skip_comment)(s)
}

/// reads a usize, rejecting overflowing values
fn read_integer(s:&str) -> IResult<&str, usize> {
    let (rest, digits) = digit1(s)?;
    match digits.parse::<usize>() {
        Ok(value) => Ok((rest, value)),
        Err(_) => Err(nom::Err::Error(Error::new(s, ErrorKind::Digit))),
    }
}

/// reads two numbers separated by spaces, eating any trailing blank space
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    let (s, first) = read_integer(s)?;
    let (s, _) = space1(s)?;
    let (s, second) = read_integer(s)?;
    let (s, _) = multispace0(s)?;
    Ok((s, (first,second)))
}

/// reads the header containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    let (s,_) = alt((tag("p edge "), tag("p col ")))(s)?;
    read_two_integers(s)
}

/// reads an edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    let (s,_) = tag("e ")(s)?;
    read_two_integers(s)
}
