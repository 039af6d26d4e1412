use core::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    LinkOutOfRange {
        node: usize,
        link: usize,
        nodes: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LinkOutOfRange { node, link, nodes } => {
                write!(
                    f,
                    "node {node} links to {link}, but only {nodes} nodes were accepted"
                )
            }
        }
    }
}

impl std::error::Error for Error {}
