//! 検索結果の複数選択

use nm_search_common::ScoredEntry;

/// 選択中のid（選択順を保持）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// id列から選択を作る（重複は無視）
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for id in ids {
            selection.select(id);
        }
        selection
    }

    /// 全結果を選択
    pub fn all(results: &[ScoredEntry]) -> Self {
        Self::from_ids(results.iter().map(|r| r.id()))
    }

    pub fn select(&mut self, id: impl Into<String>) {
        let id = id.into();
        if !self.ids.contains(&id) {
            self.ids.push(id);
        }
    }

    pub fn deselect(&mut self, id: &str) {
        self.ids.retain(|s| s != id);
    }

    /// 指定したidを選択から外す
    pub fn exclude<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            self.deselect(id.as_ref());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// 結果のすべてが選択されているか
    pub fn covers(&self, results: &[ScoredEntry]) -> bool {
        !results.is_empty() && results.iter().all(|r| self.contains(r.id()))
    }
}
