/// Browser-style session history of locations, without reloads.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    index: usize,
}

impl History {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            entries: vec![location.into()],
            index: 0,
        }
    }

    pub fn current(&self) -> &str {
        &self.entries[self.index]
    }

    /// Adds a location after the current one, dropping anything forward of it.
    pub fn push(&mut self, location: impl Into<String>) {
        self.entries.truncate(self.index + 1);
        self.entries.push(location.into());
        self.index += 1;
    }

    pub fn back(&mut self) -> Option<&str> {
        self.index = self.index.checked_sub(1)?;
        Some(self.current())
    }

    pub fn forward(&mut self) -> Option<&str> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }

        self.index += 1;
        Some(self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::History;

    #[test]
    fn test_back_and_forward() {
        let mut history = History::new("");
        history.push("?residence=oak");
        history.push("?residence=robarts");

        assert_eq!(history.back(), Some("?residence=oak"));
        assert_eq!(history.back(), Some(""));
        assert_eq!(history.back(), None);
        assert_eq!(history.current(), "");

        assert_eq!(history.forward(), Some("?residence=oak"));
        assert_eq!(history.forward(), Some("?residence=robarts"));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn test_push_drops_forward_entries() {
        let mut history = History::new("?residence=chestnut");
        history.push("?residence=oak");
        history.back();

        history.push("?residence=newcollege");

        assert_eq!(history.forward(), None);
        assert_eq!(history.back(), Some("?residence=chestnut"));
    }
}
