/// Positional placeholder sequence for a single statement render.
///
/// Produces `$1, $2, …`, strictly increasing. One instance is created per
/// [`SelectQuery`](crate::query::SelectQuery) render and passed `&mut` to
/// every sub-renderer, so the i-th placeholder in the rendered text always
/// pairs with the i-th entry of the value list.
#[derive(Debug)]
pub struct ValueSequencer {
    num: u32,
}

impl ValueSequencer {
    pub fn new() -> Self {
        Self { num: 0 }
    }

    /// Allocate the next placeholder token
    pub fn next(&mut self) -> String {
        self.num += 1;
        format!("${}", self.num)
    }

    /// Number of placeholders allocated so far
    pub fn count(&self) -> u32 {
        self.num
    }
}

impl Default for ValueSequencer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_strictly_increasing_from_one() {
        let mut seq = ValueSequencer::new();
        assert_eq!(seq.next(), "$1");
        assert_eq!(seq.next(), "$2");
        assert_eq!(seq.next(), "$3");
        assert_eq!(seq.count(), 3);
    }
}
