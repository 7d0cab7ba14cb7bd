//! Type definitions for the show-browser application.
//!
//! Shows and episodes deserialize straight from the TVmaze JSON payloads.
//! Both are immutable once fetched; everything the UI needs beyond the raw
//! fields is derived through the display helpers below.

use html2text::render::text_renderer::TrivialDecorator;
use serde::Deserialize;

/// Stable TVmaze identifier of a show.
pub type ShowId = u64;

/// Image shown on a card when a record has no artwork.
pub const PLACEHOLDER_IMAGE: &str = "https://via.placeholder.com/210x118?text=No+Image";

/// Artwork links attached to shows and episodes.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Image {
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
}

/// Aggregate user rating of a show.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Rating {
    #[serde(default)]
    pub average: Option<f64>,
}

/// A TV series.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Show {
    /// Unique identifier for the show.
    pub id: ShowId,

    /// Display name of the show.
    pub name: String,

    /// HTML summary as delivered by the API.
    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub genres: Vec<String>,

    /// Airing status, e.g. "Running" or "Ended".
    #[serde(default)]
    pub status: Option<String>,

    /// Episode length in minutes.
    #[serde(default)]
    pub runtime: Option<u32>,

    #[serde(default)]
    pub rating: Rating,

    #[serde(default)]
    pub image: Option<Image>,
}

impl Show {
    /// Summary with markup removed.
    pub fn plain_summary(&self) -> String {
        plain_text(self.summary.as_deref().unwrap_or_default())
    }

    /// Medium artwork URL, or the placeholder.
    pub fn image_url(&self) -> &str {
        image_or_placeholder(self.image.as_ref())
    }

    /// Rating for display, "n/a" when unrated.
    pub fn rating_display(&self) -> String {
        match self.rating.average {
            Some(avg) => format!("{:.1}", avg),
            None => "n/a".to_string(),
        }
    }

    /// Runtime for display, "n/a" when unknown.
    pub fn runtime_display(&self) -> String {
        match self.runtime {
            Some(minutes) => format!("{} min", minutes),
            None => "n/a".to_string(),
        }
    }

    pub fn genres_display(&self) -> String {
        self.genres.join(" | ")
    }
}

/// A single episode of a show.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Episode {
    /// Unique identifier for the episode.
    pub id: u64,

    pub season: u32,

    /// Episode number within the season; specials have none.
    #[serde(default)]
    pub number: Option<u32>,

    pub name: String,

    /// HTML summary as delivered by the API.
    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub image: Option<Image>,
}

impl Episode {
    /// Zero-padded season/episode code.
    ///
    /// # Examples
    ///
    /// ```
    /// use show_browser::types::Episode;
    ///
    /// let ep = Episode {
    ///     id: 1,
    ///     season: 1,
    ///     number: Some(2),
    ///     name: "The Kingsroad".to_string(),
    ///     summary: None,
    ///     image: None,
    /// };
    /// assert_eq!(ep.code(), "S01E02");
    /// ```
    pub fn code(&self) -> String {
        format!("S{:02}E{:02}", self.season, self.number.unwrap_or(0))
    }

    /// Card title: name followed by the episode code.
    ///
    /// # Examples
    ///
    /// ```
    /// use show_browser::types::Episode;
    ///
    /// let ep = Episode {
    ///     id: 1,
    ///     season: 1,
    ///     number: Some(1),
    ///     name: "Winter Is Coming".to_string(),
    ///     summary: None,
    ///     image: None,
    /// };
    /// assert_eq!(ep.title(), "Winter Is Coming - S01E01");
    /// ```
    pub fn title(&self) -> String {
        format!("{} - {}", self.name, self.code())
    }

    /// Label used in the episode selector.
    pub fn to_display(&self) -> String {
        format!("{}-{}", self.code(), self.name)
    }

    /// Summary with markup removed.
    pub fn plain_summary(&self) -> String {
        plain_text(self.summary.as_deref().unwrap_or_default())
    }

    /// Medium artwork URL, or the placeholder.
    pub fn image_url(&self) -> &str {
        image_or_placeholder(self.image.as_ref())
    }
}

fn image_or_placeholder(image: Option<&Image>) -> &str {
    image
        .and_then(|img| img.medium.as_deref())
        .unwrap_or(PLACEHOLDER_IMAGE)
}

/// Width handed to the HTML renderer; summaries are collapsed onto one line
/// afterwards, so it only needs to exceed any single word.
const TEXT_WIDTH: usize = 10_000;

/// Strip HTML tags and decode entities, collapsing whitespace.
///
/// # Examples
///
/// ```
/// use show_browser::types::plain_text;
///
/// assert_eq!(plain_text("<p>Ned &amp; <b>Catelyn</b></p>"), "Ned & Catelyn");
/// assert_eq!(plain_text("Ned&#8217;s choice"), "Ned\u{2019}s choice");
/// ```
pub fn plain_text(html: &str) -> String {
    let text = html2text::from_read_with_decorator(
        html.as_bytes(),
        TEXT_WIDTH,
        TrivialDecorator::new(),
    );

    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(season: u32, number: Option<u32>, name: &str) -> Episode {
        Episode {
            id: 1,
            season,
            number,
            name: name.to_string(),
            summary: None,
            image: None,
        }
    }

    #[test]
    fn test_episode_code_zero_pads() {
        assert_eq!(episode(1, Some(1), "Pilot").code(), "S01E01");
        assert_eq!(episode(12, Some(105), "Long").code(), "S12E105");
    }

    #[test]
    fn test_episode_code_special() {
        assert_eq!(episode(3, None, "Special").code(), "S03E00");
    }

    #[test]
    fn test_episode_to_display() {
        let ep = episode(2, Some(7), "The Wolf and the Lion");
        assert_eq!(ep.to_display(), "S02E07-The Wolf and the Lion");
    }

    #[test]
    fn test_episode_image_placeholder() {
        let mut ep = episode(1, Some(1), "Pilot");
        assert_eq!(ep.image_url(), PLACEHOLDER_IMAGE);

        ep.image = Some(Image {
            medium: None,
            original: Some("https://example.com/o.jpg".to_string()),
        });
        assert_eq!(ep.image_url(), PLACEHOLDER_IMAGE);

        ep.image = Some(Image {
            medium: Some("https://example.com/m.jpg".to_string()),
            original: None,
        });
        assert_eq!(ep.image_url(), "https://example.com/m.jpg");
    }

    #[test]
    fn test_plain_text_strips_tags() {
        assert_eq!(
            plain_text("<p>Lord Eddard <i>Stark</i> is torn.</p>"),
            "Lord Eddard Stark is torn."
        );
    }

    #[test]
    fn test_plain_text_block_tags_keep_words_apart() {
        assert_eq!(plain_text("<p>one</p><p>two</p>"), "one two");
    }

    #[test]
    fn test_plain_text_entities() {
        assert_eq!(plain_text("a &lt;b&gt; &quot;c&quot; &#39;d&#39;"), "a <b> \"c\" 'd'");
        assert_eq!(plain_text("&amp;lt;"), "&lt;");
    }

    #[test]
    fn test_plain_text_numeric_entities() {
        assert_eq!(
            plain_text("<p>Ned&#8217;s choice &mdash; Daenerys&#x27; dragons &eacute;</p>"),
            "Ned\u{2019}s choice \u{2014} Daenerys' dragons \u{e9}"
        );
    }

    #[test]
    fn test_plain_text_non_breaking_space() {
        assert_eq!(plain_text("<p>King&nbsp;in the&nbsp;North</p>"), "King in the North");
    }

    #[test]
    fn test_plain_text_empty() {
        assert_eq!(plain_text(""), "");
        assert_eq!(plain_text("<br/>"), "");
    }

    #[test]
    fn test_show_deserialize_tvmaze_payload() {
        let json = r#"{
            "id": 82,
            "name": "Game of Thrones",
            "genres": ["Drama", "Adventure", "Fantasy"],
            "status": "Ended",
            "runtime": 60,
            "rating": {"average": 8.9},
            "image": {"medium": "https://img/m.jpg", "original": "https://img/o.jpg"},
            "summary": "<p>Based on the bestseller.</p>",
            "language": "English"
        }"#;

        let show: Show = serde_json::from_str(json).unwrap();
        assert_eq!(show.id, 82);
        assert_eq!(show.genres_display(), "Drama | Adventure | Fantasy");
        assert_eq!(show.rating_display(), "8.9");
        assert_eq!(show.runtime_display(), "60 min");
        assert_eq!(show.image_url(), "https://img/m.jpg");
        assert_eq!(show.plain_summary(), "Based on the bestseller.");
    }

    #[test]
    fn test_show_deserialize_nulls() {
        let json = r#"{
            "id": 5,
            "name": "Obscure",
            "genres": [],
            "status": null,
            "runtime": null,
            "rating": {"average": null},
            "image": null,
            "summary": null
        }"#;

        let show: Show = serde_json::from_str(json).unwrap();
        assert_eq!(show.rating_display(), "n/a");
        assert_eq!(show.runtime_display(), "n/a");
        assert_eq!(show.image_url(), PLACEHOLDER_IMAGE);
        assert_eq!(show.plain_summary(), "");
    }

    #[test]
    fn test_episode_deserialize_special() {
        let json = r#"{"id": 9, "season": 2, "number": null, "name": "Inside", "summary": null, "image": null}"#;
        let ep: Episode = serde_json::from_str(json).unwrap();
        assert_eq!(ep.number, None);
        assert_eq!(ep.title(), "Inside - S02E00");
    }
}
