//! Free-text filtering of shows and episodes.
//!
//! A record matches when any of its participating fields contains the
//! lower-cased query as a substring. The query is not trimmed or tokenized,
//! and an empty query matches everything. Output order always follows input
//! order.

use crate::types::{Episode, Show};

/// Textual attributes a query can be matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchField {
    Name,
    Summary,
    Genres,
}

/// Records that expose named text fields to the filter.
pub trait Searchable {
    /// Fields searched when the caller does not name any.
    const DEFAULT_FIELDS: &'static [SearchField];

    /// Text values of `field`. Multi-valued fields yield one entry per value
    /// so a query never matches across two values.
    fn field_values(&self, field: SearchField) -> Vec<String>;
}

impl Searchable for Show {
    const DEFAULT_FIELDS: &'static [SearchField] =
        &[SearchField::Name, SearchField::Genres, SearchField::Summary];

    fn field_values(&self, field: SearchField) -> Vec<String> {
        match field {
            SearchField::Name => vec![self.name.clone()],
            SearchField::Summary => vec![self.plain_summary()],
            SearchField::Genres => self.genres.clone(),
        }
    }
}

impl Searchable for Episode {
    const DEFAULT_FIELDS: &'static [SearchField] = &[SearchField::Name, SearchField::Summary];

    fn field_values(&self, field: SearchField) -> Vec<String> {
        match field {
            SearchField::Name => vec![self.name.clone()],
            SearchField::Summary => vec![self.plain_summary()],
            SearchField::Genres => Vec::new(),
        }
    }
}

/// Whether `item` matches `query` in any of `fields`.
pub fn matches<T: Searchable>(item: &T, query: &str, fields: &[SearchField]) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    fields.iter().any(|&field| {
        item.field_values(field)
            .iter()
            .any(|value| value.to_lowercase().contains(&needle))
    })
}

/// Stable filter over the named fields.
pub fn filter_by<'a, T: Searchable>(
    items: &'a [T],
    query: &str,
    fields: &[SearchField],
) -> Vec<&'a T> {
    items
        .iter()
        .filter(|item| matches(*item, query, fields))
        .collect()
}

/// Stable filter over the record type's default fields.
///
/// # Examples
///
/// ```
/// use show_browser::filter::filter;
/// use show_browser::types::Episode;
///
/// let eps = vec![
///     Episode { id: 1, season: 1, number: Some(1), name: "Winter Is Coming".into(), summary: None, image: None },
///     Episode { id: 2, season: 1, number: Some(2), name: "The Kingsroad".into(), summary: None, image: None },
/// ];
/// let hits = filter(&eps, "KING");
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].id, 2);
/// ```
pub fn filter<'a, T: Searchable>(items: &'a [T], query: &str) -> Vec<&'a T> {
    filter_by(items, query, T::DEFAULT_FIELDS)
}

/// Positions in `items` of the records matching `query`.
pub fn filter_indices<T: Searchable>(items: &[T], query: &str) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| matches(*item, query, T::DEFAULT_FIELDS))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rating;

    fn episode(id: u64, number: u32, name: &str, summary: &str) -> Episode {
        Episode {
            id,
            season: 1,
            number: Some(number),
            name: name.to_string(),
            summary: Some(summary.to_string()),
            image: None,
        }
    }

    fn show(id: u64, name: &str, genres: &[&str], summary: &str) -> Show {
        Show {
            id,
            name: name.to_string(),
            summary: Some(summary.to_string()),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            status: Some("Ended".to_string()),
            runtime: Some(60),
            rating: Rating { average: Some(8.0) },
            image: None,
        }
    }

    fn got_episodes() -> Vec<Episode> {
        vec![
            episode(
                1,
                1,
                "Winter Is Coming",
                "<p>Lord Eddard Stark is troubled by disturbing reports.</p>",
            ),
            episode(
                2,
                2,
                "The Kingsroad",
                "<p>An incident on the road to King's Landing.</p>",
            ),
            episode(3, 3, "Lord Snow", "<p>Jon begins his training.</p>"),
        ]
    }

    #[test]
    fn test_summary_entities_are_decoded_before_matching() {
        let eps = vec![episode(
            10,
            5,
            "The Wolf and the Lion",
            "<p>Ned&#8217;s investigation &mdash; at a cost.</p>",
        )];
        assert_eq!(filter(&eps, "ned\u{2019}s").len(), 1);
        assert_eq!(filter(&eps, "\u{2014} at").len(), 1);
        assert!(filter(&eps, "8217").is_empty());
        assert!(filter(&eps, "mdash").is_empty());
    }

    #[test]
    fn test_empty_query_matches_all() {
        let eps = got_episodes();
        assert_eq!(filter(&eps, "").len(), eps.len());
    }

    #[test]
    fn test_case_insensitive() {
        let eps = got_episodes();
        let upper: Vec<u64> = filter(&eps, "WINTER").iter().map(|e| e.id).collect();
        let lower: Vec<u64> = filter(&eps, "winter").iter().map(|e| e.id).collect();
        assert_eq!(upper, lower);
        assert_eq!(upper, vec![1]);
    }

    #[test]
    fn test_name_match() {
        let eps = got_episodes();
        let hits = filter_by(&eps, "kingsroad", &[SearchField::Name]);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "The Kingsroad");
    }

    #[test]
    fn test_summary_match() {
        let eps = got_episodes();
        assert!(filter_by(&eps, "stark", &[SearchField::Name]).is_empty());

        let hits = filter(&eps, "stark");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn test_markup_does_not_match() {
        let eps = got_episodes();
        assert!(filter(&eps, "<p>").is_empty());
    }

    #[test]
    fn test_query_whitespace_is_significant() {
        let eps = got_episodes();
        assert_eq!(filter(&eps, "lord ").len(), 2);
        assert!(filter(&eps, " lord snow ").is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let eps = got_episodes();
        let ids: Vec<u64> = filter(&eps, "o").iter().map(|e| e.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_show_genre_match() {
        let shows = vec![
            show(1, "Under the Dome", &["Drama", "Science-Fiction"], "A town."),
            show(2, "Person of Interest", &["Action", "Crime"], "A machine."),
        ];
        let hits = filter(&shows, "science");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, 1);
    }

    #[test]
    fn test_show_genres_matched_independently() {
        let shows = vec![show(1, "X", &["Drama", "Comedy"], "")];
        assert!(filter(&shows, "dramacomedy").is_empty());
        assert!(filter(&shows, "ama, com").is_empty());
    }

    #[test]
    fn test_episode_ignores_genres_field() {
        let eps = got_episodes();
        assert!(filter_by(&eps, "lord", &[SearchField::Genres]).is_empty());
    }

    #[test]
    fn test_filter_indices() {
        let eps = got_episodes();
        assert_eq!(filter_indices(&eps, "lord"), vec![0, 2]);
        assert_eq!(filter_indices(&eps, ""), vec![0, 1, 2]);
        assert!(filter_indices(&eps, "zzz").is_empty());
    }

    #[test]
    fn test_missing_summary() {
        let mut eps = got_episodes();
        eps[0].summary = None;
        assert!(filter(&eps, "stark").is_empty());
    }
}
