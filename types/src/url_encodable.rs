use indexmap::IndexMap;

/// Anything projectable into the ordered parameter map that the response
/// mode encoders serialize onto the wire.
pub trait UrlEncodable {
    fn params(self) -> IndexMap<String, String>;
}

impl UrlEncodable for IndexMap<String, String> {
    fn params(self) -> IndexMap<String, String> {
        self
    }
}

impl<A, B> UrlEncodable for (A, B)
where
    A: UrlEncodable,
    B: UrlEncodable,
{
    fn params(self) -> IndexMap<String, String> {
        let (first, second) = self;
        let mut params = first.params();
        params.extend(second.params());
        params
    }
}

impl<T: UrlEncodable> UrlEncodable for Option<T> {
    fn params(self) -> IndexMap<String, String> {
        match self {
            Some(it) => it.params(),
            None => IndexMap::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;

    use crate::state::State;
    use crate::url_encodable::UrlEncodable;

    #[test]
    fn test_tuple_merges_parameter_maps() {
        let mut params = IndexMap::new();
        params.insert("code".to_owned(), "some_code".to_owned());

        let merged = (params, State::new("abc")).params();

        assert_eq!(Some(&"some_code".to_owned()), merged.get("code"));
        assert_eq!(Some(&"abc".to_owned()), merged.get("state"));
    }

    #[test]
    fn test_second_element_wins_on_duplicate_keys() {
        let mut first = IndexMap::new();
        first.insert("state".to_owned(), "old".to_owned());

        let merged = (first, State::new("new")).params();

        assert_eq!(Some(&"new".to_owned()), merged.get("state"));
    }
}
