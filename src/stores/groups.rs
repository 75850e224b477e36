use crate::{Error, Group, Result};

#[derive(Debug, Default, Clone)]
pub struct GroupsStore {
    groups: Vec<Group>,
}

impl GroupsStore {
    pub fn new() -> Self {
        Self { groups: Vec::new() }
    }

    /// Validates and appends a group, returning its position.
    pub fn push(&mut self, group: Group) -> Result<usize> {
        group.validate()?;
        self.groups.push(group);
        Ok(self.groups.len() - 1)
    }

    pub fn remove(&mut self, index: usize) -> Result<Group> {
        self.check_index(index)?;
        Ok(self.groups.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&Group> {
        self.groups.get(index).ok_or(Error::GroupIndexOutOfRange {
            index,
            len: self.groups.len(),
        })
    }

    pub fn check_index(&self, index: usize) -> Result<()> {
        self.get(index).map(|_| ())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn as_slice(&self) -> &[Group] {
        &self.groups
    }

    pub fn iter(&self) -> impl Iterator<Item = &Group> {
        self.groups.iter()
    }
}
