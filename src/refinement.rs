use std::collections::{BTreeMap, HashMap, HashSet};
use std::fmt;
use std::fs;

use bit_set::BitSet;
use thiserror::Error;

/** errors rejected while building or comparing incidence matrices */
#[derive(Error, Debug)]
pub enum RefinementError {
    /// the matrix text holds no row
    #[error("the matrix has no row")]
    Empty,
    /// a row disagrees with the first row's column count
    #[error("row {0} has {1} columns, expected {2}")]
    RaggedRow(usize, usize, usize),
    /// a row holds something else than 0/1 digits and whitespace
    #[error("unexpected character '{1}' in row {0}")]
    InvalidChar(usize, char),
    /// the two matrices cannot be compared
    #[error("matrices disagree in extent: {0}x{1} vs {2}x{3}")]
    ExtentMismatch(usize, usize, usize, usize),
    /// an instance block ended before all its rows were read
    #[error("expected {0} matrix rows, found {1}")]
    MissingRows(usize, usize),
    /// an instance block starts with something else than a row count
    #[error("invalid instance header: '{0}'")]
    BadHeader(String),
    /// the instance file could not be read
    #[error("cannot read the instance file: {0}")]
    Io(#[from] std::io::Error),
}

/** a boolean incidence matrix: rows are vertices, columns are an opaque
incidence structure (not necessarily an adjacency matrix). all rows share
the same number of columns. */
#[derive(Debug, Clone)]
pub struct IncidenceMatrix {
    /// number of rows (vertices)
    nb_rows: usize,
    /// number of columns
    nb_cols: usize,
    /// rows[i]: bitset of the columns where row i has a 1
    rows: Vec<BitSet>,
}

impl IncidenceMatrix {

    /** parses a matrix from 0/1 text rows (whitespace inside a row is
    ignored; the first row fixes the column count). */
    pub fn parse_rows(lines:&[&str]) -> Result<Self, RefinementError> {
        let mut rows:Vec<BitSet> = Vec::with_capacity(lines.len());
        let mut nb_cols:Option<usize> = None;
        for (i,line) in lines.iter().enumerate() {
            let mut row = BitSet::new();
            let mut count = 0;
            for ch in line.chars() {
                if ch.is_whitespace() { continue; }
                match ch {
                    '0' => { count += 1; }
                    '1' => { row.insert(count); count += 1; }
                    _ => return Err(RefinementError::InvalidChar(i, ch)),
                }
            }
            match nb_cols {
                None => { nb_cols = Some(count); }
                Some(c) if c != count => {
                    return Err(RefinementError::RaggedRow(i, count, c));
                }
                Some(_) => {}
            }
            rows.push(row);
        }
        let nb_cols = nb_cols.ok_or(RefinementError::Empty)?;
        Ok(Self { nb_rows: rows.len(), nb_cols, rows })
    }

    /// parses a matrix from a text block, one row per nonempty line
    pub fn parse(text:&str) -> Result<Self, RefinementError> {
        let lines:Vec<&str> = text.lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        Self::parse_rows(&lines)
    }

    /// number of rows (vertices)
    pub fn nb_rows(&self) -> usize { self.nb_rows }

    /// number of columns
    pub fn nb_cols(&self) -> usize { self.nb_cols }

    /** runs color refinement to its fixpoint and returns the per-row colors.
        1. each row starts with its row sum as color
        2. each round rehashes every row from its own color plus the multiset
           of colors of the rows it shares a column with (one occurrence per
           shared column)
        3. rounds stop when the number of distinct colors stops growing
           (at most nb_rows rounds)
    Seeding the hash with the row's previous color makes each round a
    refinement of the previous partition, so the distinct-color count is
    monotone and the stop test is a fixpoint test. */
    pub fn refine(&self) -> Vec<u64> {
        let n = self.nb_rows;
        // members[j]: rows having a 1 in column j
        let mut members:Vec<Vec<usize>> = vec![vec![] ; self.nb_cols];
        for (i,row) in self.rows.iter().enumerate() {
            for j in row.iter() { members[j].push(i); }
        }
        let mut colors:Vec<u64> = self.rows.iter().map(|r| r.len() as u64).collect();
        let mut nb_distinct = count_distinct(&colors);
        for _ in 0..n {
            // signature[i]: color -> occurrences among column-sharing rows
            let mut signature:Vec<BTreeMap<u64,u64>> = vec![BTreeMap::new() ; n];
            for rows_of_col in &members {
                for &i in rows_of_col {
                    for &k in rows_of_col {
                        if k != i {
                            *signature[i].entry(colors[k]).or_insert(0) += 1;
                        }
                    }
                }
            }
            let next:Vec<u64> = (0..n).map(|i| {
                let mut h = colors[i];
                for (&c,&count) in &signature[i] {
                    h = h.wrapping_mul(31).wrapping_add(c.wrapping_mul(count));
                }
                h
            }).collect();
            let next_distinct = count_distinct(&next);
            let stabilized = next_distinct == nb_distinct;
            colors = next;
            nb_distinct = next_distinct;
            if stabilized { break; }
        }
        colors
    }
}

fn count_distinct(colors:&[u64]) -> usize {
    colors.iter().collect::<HashSet<_>>().len()
}

/// frequency histogram of the refined colors, bucketed modulo `modulus`
pub fn color_histogram(colors:&[u64], modulus:u64) -> HashMap<u64,usize> {
    let mut res = HashMap::new();
    for &c in colors {
        *res.entry(c % modulus).or_insert(0) += 1;
    }
    res
}

/** verdict of the refinement comparison. `NotIsomorphic` is certain;
`PossiblyIsomorphic` is tentative (equal histograms do not prove
isomorphism). */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// equal histograms: the matrices may be isomorphic
    PossiblyIsomorphic,
    /// different histograms: the matrices cannot be isomorphic
    NotIsomorphic,
}

impl Verdict {
    /// true unless the matrices are certainly not isomorphic
    pub fn possibly_isomorphic(self) -> bool {
        self == Verdict::PossiblyIsomorphic
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f:&mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::PossiblyIsomorphic => write!(f, "+++"),
            Verdict::NotIsomorphic => write!(f, "---"),
        }
    }
}

/** refines both matrices and compares their color histograms (buckets:
nb_rows², identical for both since the extents must match). */
pub fn compare(a:&IncidenceMatrix, b:&IncidenceMatrix) -> Result<Verdict, RefinementError> {
    if a.nb_rows != b.nb_rows || a.nb_cols != b.nb_cols {
        return Err(RefinementError::ExtentMismatch(
            a.nb_rows, a.nb_cols, b.nb_rows, b.nb_cols,
        ));
    }
    let modulus = (a.nb_rows * a.nb_rows) as u64;
    let hist_a = color_histogram(&a.refine(), modulus);
    let hist_b = color_histogram(&b.refine(), modulus);
    if hist_a == hist_b {
        Ok(Verdict::PossiblyIsomorphic)
    } else {
        Ok(Verdict::NotIsomorphic)
    }
}

/** reads a sequence of instance pairs: each instance is a row count `n` on
its own line followed by two n-row matrices, blank lines ignored. */
pub fn read_instance_pairs(filename:&str)
-> Result<Vec<(IncidenceMatrix,IncidenceMatrix)>, RefinementError> {
    let text = fs::read_to_string(filename)?;
    parse_instance_pairs(&text)
}

/// same as [`read_instance_pairs`], from an in-memory string
pub fn parse_instance_pairs(text:&str)
-> Result<Vec<(IncidenceMatrix,IncidenceMatrix)>, RefinementError> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());
    let mut res = Vec::new();
    while let Some(header) = lines.next() {
        let n:usize = header.parse()
            .map_err(|_| RefinementError::BadHeader(header.to_string()))?;
        if n == 0 { return Err(RefinementError::BadHeader(header.to_string())); }
        let first = collect_matrix(&mut lines, n)?;
        let second = collect_matrix(&mut lines, n)?;
        res.push((first, second));
    }
    Ok(res)
}

fn collect_matrix<'a>(
    lines:&mut impl Iterator<Item=&'a str>, n:usize
) -> Result<IncidenceMatrix, RefinementError> {
    let mut rows = Vec::with_capacity(n);
    for _ in 0..n {
        match lines.next() {
            Some(l) => rows.push(l),
            None => return Err(RefinementError::MissingRows(n, rows.len())),
        }
    }
    IncidenceMatrix::parse_rows(&rows)
}


#[cfg(test)]
mod tests {
    use super::*;

    fn cycle4() -> IncidenceMatrix {
        IncidenceMatrix::parse("0101\n1010\n0101\n1010").unwrap()
    }

    fn path4() -> IncidenceMatrix {
        IncidenceMatrix::parse("0100\n1010\n0101\n0010").unwrap()
    }

    #[test]
    fn parse_and_extent() {
        let mat = cycle4();
        assert_eq!(mat.nb_rows(), 4);
        assert_eq!(mat.nb_cols(), 4);
        // whitespace between digits is fine
        let spaced = IncidenceMatrix::parse("0 1\n1 0").unwrap();
        assert_eq!(spaced.nb_rows(), 2);
        assert_eq!(spaced.nb_cols(), 2);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!(matches!(
            IncidenceMatrix::parse(""),
            Err(RefinementError::Empty)
        ));
        assert!(matches!(
            IncidenceMatrix::parse("01\n011"),
            Err(RefinementError::RaggedRow(1,3,2))
        ));
        assert!(matches!(
            IncidenceMatrix::parse("01\n0x"),
            Err(RefinementError::InvalidChar(1,'x'))
        ));
    }

    #[test]
    fn refine_separates_path_endpoints() {
        let colors = path4().refine();
        // endpoints get one color, middle vertices another
        assert_eq!(colors[0], colors[3]);
        assert_eq!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[1]);
    }

    #[test]
    fn refine_keeps_regular_graph_uniform() {
        let colors = cycle4().refine();
        assert!(colors.iter().all(|&c| c == colors[0]));
    }

    #[test]
    fn permuted_matrix_is_possibly_isomorphic() {
        // paw graph (triangle 0-1-2 plus pendant 3 on 0), then the same
        // graph with every vertex label rotated by one
        let paw = IncidenceMatrix::parse("0111\n1010\n1100\n1000").unwrap();
        let rotated = IncidenceMatrix::parse("0100\n1011\n0101\n0110").unwrap();
        assert_eq!(compare(&paw, &rotated).unwrap(), Verdict::PossiblyIsomorphic);
        assert!(compare(&paw, &rotated).unwrap().possibly_isomorphic());
    }

    #[test]
    fn different_degree_multisets_cannot_be_isomorphic() {
        assert_eq!(compare(&cycle4(), &path4()).unwrap(), Verdict::NotIsomorphic);
    }

    #[test]
    fn extent_mismatch_is_an_error() {
        let small = IncidenceMatrix::parse("01\n10").unwrap();
        assert!(matches!(
            compare(&small, &cycle4()),
            Err(RefinementError::ExtentMismatch(2,2,4,4))
        ));
    }

    #[test]
    fn verdict_display() {
        assert_eq!(Verdict::PossiblyIsomorphic.to_string(), "+++");
        assert_eq!(Verdict::NotIsomorphic.to_string(), "---");
    }

    #[test]
    fn instance_pairs_are_read_in_sequence() {
        let text = "2\n01\n10\n01\n10\n\n3\n010\n101\n010\n010\n101\n010\n";
        let pairs = parse_instance_pairs(text).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0.nb_rows(), 2);
        assert_eq!(pairs[1].0.nb_rows(), 3);
        assert_eq!(compare(&pairs[1].0, &pairs[1].1).unwrap(), Verdict::PossiblyIsomorphic);
    }

    #[test]
    fn test_read_instance_pairs() {
        let pairs = read_instance_pairs("insts/iso_pairs.txt").unwrap();
        assert_eq!(pairs.len(), 2);
        for (a,b) in &pairs {
            assert!(compare(a, b).unwrap().possibly_isomorphic());
        }
    }

    #[test]
    fn truncated_instance_is_an_error() {
        assert!(matches!(
            parse_instance_pairs("2\n01\n10\n01"),
            Err(RefinementError::MissingRows(2,1))
        ));
        assert!(matches!(
            parse_instance_pairs("x\n01\n10"),
            Err(RefinementError::BadHeader(_))
        ));
    }
}
