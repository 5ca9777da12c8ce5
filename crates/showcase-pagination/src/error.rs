/// Pagination configuration error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    ZeroPageSize,
}

impl std::fmt::Display for PaginationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroPageSize => write!(f, "items per page must be greater than zero"),
        }
    }
}

impl std::error::Error for PaginationError {}
