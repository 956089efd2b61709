//! Location of a node inside the input document's `structure` list.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}

/// Sequence of list indices and mapping keys from the structure root.
///
/// Renders as `structure[2][0].PUBLIC`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath(Vec<PathSegment>);

impl NodePath {
    pub fn root() -> NodePath {
        NodePath(Vec::new())
    }

    pub fn index(&self, i: usize) -> NodePath {
        self.with(PathSegment::Index(i))
    }

    pub fn key(&self, key: &str) -> NodePath {
        self.with(PathSegment::Key(key.to_string()))
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    fn with(&self, segment: PathSegment) -> NodePath {
        let mut segments = self.0.clone();
        segments.push(segment);
        NodePath(segments)
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "structure")?;
        for segment in &self.0 {
            match segment {
                PathSegment::Index(i) => write!(f, "[{i}]")?,
                PathSegment::Key(key) => write!(f, ".{key}")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(NodePath::root().to_string(), "structure");
        let path = NodePath::root().index(2).index(0).key("PUBLIC");
        assert_eq!(path.to_string(), "structure[2][0].PUBLIC");
        assert_eq!(path.segments().len(), 3);
    }
}
