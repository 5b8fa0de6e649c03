use indexmap::IndexMap;

/// Ordered mapping of header name to the list of values carried under it.
///
/// Names are stored exactly as provided. Lookups try the exact spelling first and
/// fall back to an ASCII case-insensitive match, so maps filled from lowercase
/// wire representations still answer for canonical names.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Headers {
    entries: IndexMap<String, Vec<String>>,
}

impl Headers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    fn index_of(&self, name: &str) -> Option<usize> {
        self.entries.get_index_of(name).or_else(|| {
            self.entries
                .keys()
                .position(|key| key.eq_ignore_ascii_case(name))
        })
    }

    /// Every value stored under `name`.
    pub fn get(&self, name: &str) -> Option<&[String]> {
        self.index_of(name)
            .and_then(|idx| self.entries.get_index(idx))
            .map(|(_, values)| values.as_slice())
    }

    /// The first value stored under `name`, which is what request-side reads use.
    pub fn get_first(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    /// Replaces whatever is stored under `name` with a single value.
    pub fn insert<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        self.insert_values(name, [value.into()]);
    }

    /// Replaces whatever is stored under `name` with `values`, keeping their order.
    pub fn insert_values<N, I, V>(&mut self, name: N, values: I)
    where
        N: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let name = name.into();
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        match self.index_of(&name) {
            Some(idx) => {
                if let Some((_, slot)) = self.entries.get_index_mut(idx) {
                    *slot = values;
                }
            }
            None => {
                self.entries.insert(name, values);
            }
        }
    }

    /// Adds a value after any already stored under `name`.
    pub fn append<N, V>(&mut self, name: N, value: V)
    where
        N: Into<String>,
        V: Into<String>,
    {
        let name = name.into();
        match self.index_of(&name) {
            Some(idx) => {
                if let Some((_, slot)) = self.entries.get_index_mut(idx) {
                    slot.push(value.into());
                }
            }
            None => {
                self.entries.insert(name, vec![value.into()]);
            }
        }
    }

    pub fn remove(&mut self, name: &str) -> Option<Vec<String>> {
        let idx = self.index_of(name)?;
        self.entries
            .shift_remove_index(idx)
            .map(|(_, values)| values)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up `primary`, then `fallback`, returning the first non-empty value list.
    pub(crate) fn first_present(&self, primary: &str, fallback: &str) -> Option<&[String]> {
        [primary, fallback]
            .into_iter()
            .filter_map(|name| self.get(name))
            .find(|values| !values.is_empty())
    }
}

impl<N, V> FromIterator<(N, V)> for Headers
where
    N: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, V)>>(iter: T) -> Self {
        let mut headers = Headers::new();
        for (name, value) in iter {
            headers.append(name, value);
        }
        headers
    }
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
