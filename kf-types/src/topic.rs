use crate::TopicErr;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// The topics of a cluster, sorted ascending and without duplicates.
pub struct TopicSet {
    names: Vec<String>,
}

impl TopicSet {
    pub fn new(mut names: Vec<String>) -> Self {
        names.sort_unstable();
        names.dedup();
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names
            .binary_search_by(|probe| probe.as_str().cmp(name))
            .is_ok()
    }

    /// Check the requested topic exists. An absent or empty name is `NoTopicRequested`.
    pub fn validate<'a>(&self, requested: Option<&'a str>) -> Result<&'a str, TopicErr> {
        match requested {
            None | Some("") => Err(TopicErr::NoTopicRequested),
            Some(name) if self.contains(name) => Ok(name),
            Some(name) => Err(TopicErr::NotFound(name.to_owned())),
        }
    }
}

impl FromIterator<String> for TopicSet {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
