/// Deduplicated comments of a report, numbered by first appearance.
#[derive(Debug, Default, PartialEq)]
pub struct Footnotes {
    comments: Vec<String>,
}

impl Footnotes {
    pub fn new() -> Self {
        Self::default()
    }

    /// The 1-based number of a comment, registering it if it is new.
    pub fn number_for(&mut self, comment: &str) -> usize {
        let index = match self.comments.iter().position(|known| known == comment) {
            Some(index) => index,
            None => {
                self.comments.push(comment.into());
                self.comments.len() - 1
            }
        };

        index + 1
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.comments
    }
}
