//! Declarative layout options shared by several blocks.

/// Section background token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
    White,
    Gray,
    Blue,
}

impl Background {
    /// Parse a CMS token, falling back to the block's default for unknown values.
    pub fn from_token(token: Option<&str>, fallback: Background) -> Self {
        match token.map(str::trim) {
            Some("white") => Background::White,
            Some("gray") | Some("grey") => Background::Gray,
            Some("blue") => Background::Blue,
            _ => fallback,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Background::White => "bg-white",
            Background::Gray => "bg-gray",
            Background::Blue => "bg-blue",
        }
    }
}

/// Grid column count for card grids.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Columns {
    Two,
    Three,
    Four,
}

impl Columns {
    pub fn from_token(token: Option<&str>) -> Self {
        match token.map(str::trim) {
            Some("2") => Columns::Two,
            Some("4") => Columns::Four,
            _ => Columns::Three,
        }
    }

    pub fn count(self) -> usize {
        match self {
            Columns::Two => 2,
            Columns::Three => 3,
            Columns::Four => 4,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            Columns::Two => "grid columns-2",
            Columns::Three => "grid columns-3",
            Columns::Four => "grid columns-4",
        }
    }
}

/// Split a list for a two-column layout: the left column takes the extra item.
///
/// Returns the columns and the index of the first item in the right column.
pub fn split_columns<T>(items: &[T]) -> (&[T], &[T], usize) {
    let mid = items.len().div_ceil(2);
    let (left, right) = items.split_at(mid);
    (left, right, mid)
}

/// Column count of the stats grid: one per stat, capped at four.
pub fn stat_columns(count: usize) -> usize {
    count.clamp(1, 4)
}
