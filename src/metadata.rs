//! Cache and pagination metadata decoded from response headers
//!
//! Metadata is advisory. Nothing in this module fails: a missing or
//! malformed header degrades to a documented sentinel so the payload that
//! came with it is never rejected because of a bad hint.
//!
//! | value            | sentinel                         |
//! |------------------|----------------------------------|
//! | max-age          | [`MAX_AGE_UNSET`] (1 nanosecond) |
//! | expires          | [`expires_unset`] (Unix epoch)   |
//! | page size, total | [`PAGE_UNKNOWN`] (`-1`)          |
//! | next/last page   | [`PAGE_UNKNOWN`] (`-1`)          |

use crate::constants::headers as header_names;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::form_urlencoded;

/// Max-age reported when `Cache-Control` carries no usable `max-age`
///
/// Non-zero so that an explicit `max-age=0` stays distinguishable.
pub const MAX_AGE_UNSET: Duration = Duration::from_nanos(1);

/// Page number, page size or total reported when unknown
pub const PAGE_UNKNOWN: i64 = -1;

const MAX_AGE_DIRECTIVE: &str = "max-age=";

/// `Expires` layout after the weekday, without the trailing zone token
const EXPIRES_LAYOUT: &str = "%d %b %Y %H:%M:%S";

/// Shape of `Wed, 11 Jan 2023 12:08:21`: `0` is a digit, letters are letters
const EXPIRES_SHAPE: &str = "Www, 00 Mmm 0000 00:00:00";

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Timestamp reported when `Expires` is absent or unparseable
pub fn expires_unset() -> DateTime<Utc> {
    DateTime::<Utc>::default()
}

/// Relations the API emits in its `Link` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkRelation {
    First,
    Prev,
    Next,
    Last,
}

impl LinkRelation {
    /// Value of the `rel` parameter for this relation
    pub fn as_str(&self) -> &'static str {
        match self {
            LinkRelation::First => "first",
            LinkRelation::Prev => "prev",
            LinkRelation::Next => "next",
            LinkRelation::Last => "last",
        }
    }
}

/// Returns every value of a header, case-insensitively
///
/// Values that are not visible ASCII keep their position as `""`, so the
/// first value stays the first value.
pub fn header_values<'a>(headers: &'a HeaderMap, name: &str) -> Vec<&'a str> {
    headers
        .get_all(name)
        .iter()
        .map(|value| value.to_str().unwrap_or_default())
        .collect()
}

/// Parses the `max-age` directive of the first `Cache-Control` value
///
/// # Returns
/// The directive as a duration in seconds, or [`MAX_AGE_UNSET`]
pub fn parse_max_age(values: &[&str]) -> Duration {
    let Some(value) = values.first() else {
        return MAX_AGE_UNSET;
    };
    let Some(start) = value.find(MAX_AGE_DIRECTIVE) else {
        return MAX_AGE_UNSET;
    };

    let rest = &value[start + MAX_AGE_DIRECTIVE.len()..];
    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());

    rest[..end]
        .parse::<u64>()
        .map(Duration::from_secs)
        .unwrap_or(MAX_AGE_UNSET)
}

/// Parses the first `Expires` value, e.g. `Wed, 11 Jan 2023 12:08:21 GMT`
///
/// # Returns
/// The timestamp normalized to UTC, or [`expires_unset`]
pub fn parse_expires(values: &[&str]) -> DateTime<Utc> {
    values
        .first()
        .and_then(|value| parse_http_date(value.trim()))
        .unwrap_or_else(expires_unset)
}

// The zone token must be alphabetic and is read as UTC. The weekday must be
// a valid abbreviation but is not checked against the date.
fn parse_http_date(value: &str) -> Option<DateTime<Utc>> {
    let (stamp, zone) = value.rsplit_once(' ')?;
    if zone.is_empty() || !zone.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    if !has_expires_shape(stamp) {
        return None;
    }

    let (weekday, date) = stamp.split_once(", ")?;
    if !WEEKDAYS.contains(&weekday) {
        return None;
    }

    NaiveDateTime::parse_from_str(date, EXPIRES_LAYOUT)
        .ok()
        .map(|naive| naive.and_utc())
}

fn has_expires_shape(stamp: &str) -> bool {
    stamp.len() == EXPIRES_SHAPE.len()
        && stamp
            .bytes()
            .zip(EXPIRES_SHAPE.bytes())
            .all(|(actual, expected)| match expected {
                b'0' => actual.is_ascii_digit(),
                b'W' | b'w' | b'M' | b'm' => actual.is_ascii_alphabetic(),
                _ => actual == expected,
            })
}

/// Reads the `page` query parameter of the `Link` target with the given relation
///
/// The header looks like
/// `<https://.../tickers?page=63>; rel="last", <https://.../tickers?page=2>; rel="next"`.
/// Only the first header value is consulted and the first matching
/// candidate wins.
///
/// # Returns
/// The page number, or [`PAGE_UNKNOWN`]
pub fn parse_page_index_from_link(values: &[&str], relation: LinkRelation) -> i64 {
    let Some(value) = values.first() else {
        return PAGE_UNKNOWN;
    };

    let marker = format!(">; rel=\"{}\"", relation.as_str());
    let Some(candidate) = split_link_candidates(value)
        .into_iter()
        .find(|candidate| candidate.contains(&marker))
    else {
        return PAGE_UNKNOWN;
    };

    candidate
        .split_once(&marker)
        .and_then(|(target, _)| target.strip_prefix('<'))
        .and_then(page_param)
        .unwrap_or(PAGE_UNKNOWN)
}

/// Splits a `Link` value on the commas that separate entries
///
/// Commas inside `<...>` belong to the target URL (`ids=bitcoin,ethereum`).
fn split_link_candidates(value: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    let mut in_target = false;
    let mut start = 0;

    for (idx, c) in value.char_indices() {
        match c {
            '<' => in_target = true,
            '>' => in_target = false,
            ',' if !in_target => {
                candidates.push(value[start..idx].trim());
                start = idx + 1;
            }
            _ => {}
        }
    }
    candidates.push(value[start..].trim());

    candidates
}

fn page_param(target: &str) -> Option<i64> {
    let (_, query) = target.split_once('?')?;
    let query = query.split_once('#').map_or(query, |(query, _)| query);

    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "page")
        .and_then(|(_, page)| page.trim().parse().ok())
}

/// Derives next and last page numbers from the `Total` and `Per-Page` counts
///
/// # Arguments
/// * `current_page` - Page that was requested; values below 1 count as 1
/// * `total_count` - Value of `Total`, or [`PAGE_UNKNOWN`]
/// * `page_size` - Value of `Per-Page`, or [`PAGE_UNKNOWN`]
///
/// # Returns
/// `(next, last)`, where `last = ceil(total_count / page_size)` and `next` is
/// [`PAGE_UNKNOWN`] once it would pass `last`. Both are [`PAGE_UNKNOWN`]
/// when either count is unknown or not usable as a divisor.
pub fn compute_page_indices_from_counts(
    current_page: i64,
    total_count: i64,
    page_size: i64,
) -> (i64, i64) {
    let current_page = current_page.max(1);
    if total_count == PAGE_UNKNOWN || page_size == PAGE_UNKNOWN {
        return (PAGE_UNKNOWN, PAGE_UNKNOWN);
    }
    if total_count < 0 || page_size <= 0 {
        return (PAGE_UNKNOWN, PAGE_UNKNOWN);
    }

    let last = total_count / page_size + i64::from(total_count % page_size != 0);
    let next = current_page.saturating_add(1);
    let next = if next > last { PAGE_UNKNOWN } else { next };

    (next, last)
}

/// Parses the first header value as a base-10 integer, or returns `default`
pub fn parse_int(values: &[&str], default: i64) -> i64 {
    values
        .first()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

/// Cache lifetime advertised by a response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheMetadata {
    /// `Cache-Control` max-age, or [`MAX_AGE_UNSET`]
    pub max_age: Duration,

    /// `Expires`, or [`expires_unset`]
    pub expires_at: DateTime<Utc>,
}

impl Default for CacheMetadata {
    fn default() -> Self {
        Self {
            max_age: MAX_AGE_UNSET,
            expires_at: expires_unset(),
        }
    }
}

impl CacheMetadata {
    /// Decodes `Cache-Control` and `Expires`, each independently of the other
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let cache_control = header_values(headers, header_names::CACHE_CONTROL);
        let expires = header_values(headers, header_names::EXPIRES);

        let max_age = parse_max_age(&cache_control);
        if !cache_control.is_empty() && max_age == MAX_AGE_UNSET {
            tracing::debug!(value = ?cache_control.first(), "Ignoring Cache-Control without max-age");
        }

        let expires_at = parse_expires(&expires);
        if !expires.is_empty() && expires_at == expires_unset() {
            tracing::debug!(value = ?expires.first(), "Ignoring unparseable Expires header");
        }

        Self {
            max_age,
            expires_at,
        }
    }

    /// Returns the max-age, or None when the response did not carry one
    pub fn ttl(&self) -> Option<Duration> {
        (self.max_age != MAX_AGE_UNSET).then_some(self.max_age)
    }

    /// Returns the expiry, or None when the response did not carry one
    pub fn expires(&self) -> Option<DateTime<Utc>> {
        (self.expires_at != expires_unset()).then_some(self.expires_at)
    }

    /// True if a known expiry is at or before `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires().is_some_and(|expires| expires <= now)
    }
}

/// Where [`PageMetadata`] took its next and last page numbers from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageIndexSource {
    /// The `Link` header's `next` and `last` relations
    Link,
    /// `ceil(Total / Per-Page)`, computed client-side
    #[default]
    Counts,
}

/// Cache lifetime plus pagination bounds of a paged response
///
/// `Link` is the system of record: when the response carries a `Link`
/// header, the next and last pages come from it alone, even where `Total`
/// and `Per-Page` would give other numbers. Only a response without any
/// `Link` header falls back to count arithmetic. The two are never merged,
/// and [`PageMetadata::index_source`] says which one was used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMetadata {
    pub cache: CacheMetadata,

    /// `Per-Page`, or [`PAGE_UNKNOWN`]
    pub page_size: i64,

    /// `Total`, or [`PAGE_UNKNOWN`]
    pub total_count: i64,

    pub next_page_index: i64,
    pub last_page_index: i64,

    pub index_source: PageIndexSource,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            cache: CacheMetadata::default(),
            page_size: PAGE_UNKNOWN,
            total_count: PAGE_UNKNOWN,
            next_page_index: PAGE_UNKNOWN,
            last_page_index: PAGE_UNKNOWN,
            index_source: PageIndexSource::Counts,
        }
    }
}

impl PageMetadata {
    /// Decodes cache and pagination headers for the page that was requested
    pub fn from_headers(headers: &HeaderMap, current_page: i64) -> Self {
        let cache = CacheMetadata::from_headers(headers);
        let page_size = parse_int(&header_values(headers, header_names::PER_PAGE), PAGE_UNKNOWN);
        let total_count = parse_int(&header_values(headers, header_names::TOTAL), PAGE_UNKNOWN);

        let link = header_values(headers, header_names::LINK);
        let index_source = if link.is_empty() {
            PageIndexSource::Counts
        } else {
            PageIndexSource::Link
        };
        let (next_page_index, last_page_index) = match index_source {
            PageIndexSource::Counts => {
                compute_page_indices_from_counts(current_page, total_count, page_size)
            }
            PageIndexSource::Link => (
                parse_page_index_from_link(&link, LinkRelation::Next),
                parse_page_index_from_link(&link, LinkRelation::Last),
            ),
        };

        tracing::trace!(
            current_page,
            page_size,
            total_count,
            next_page_index,
            last_page_index,
            source = ?index_source,
            "Decoded page metadata"
        );

        Self {
            cache,
            page_size,
            total_count,
            next_page_index,
            last_page_index,
            index_source,
        }
    }

    /// Returns the next page number, if there is one
    pub fn next_page(&self) -> Option<u32> {
        positive_page(self.next_page_index)
    }

    /// Returns the last page number, if known
    pub fn last_page(&self) -> Option<u32> {
        positive_page(self.last_page_index)
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page().is_some()
    }
}

fn positive_page(index: i64) -> Option<u32> {
    u32::try_from(index).ok().filter(|page| *page > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use reqwest::header::{HeaderName, HeaderValue};

    const TICKERS_LINK: &str = "<https://api.coingecko.com/api/v3/coins/bitcoin/tickers?page=63>; rel=\"last\", \
         <https://api.coingecko.com/api/v3/coins/bitcoin/tickers?page=2>; rel=\"next\"";

    fn header_map(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(
                HeaderName::from_bytes(name.as_bytes()).unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        map
    }

    #[test]
    fn test_parse_max_age() {
        assert_eq!(parse_max_age(&[]), MAX_AGE_UNSET);
        assert_eq!(
            parse_max_age(&["public, max-age=120"]),
            Duration::from_secs(120)
        );
        assert_eq!(parse_max_age(&["max-age=30, public"]), Duration::from_secs(30));
        assert_eq!(parse_max_age(&["invalid string"]), MAX_AGE_UNSET);
        assert_eq!(parse_max_age(&["public, max-age=abc"]), MAX_AGE_UNSET);
        assert_eq!(parse_max_age(&["max-age=0"]), Duration::ZERO);
    }

    #[test]
    fn test_parse_max_age_reads_first_value_only() {
        assert_eq!(
            parse_max_age(&["no-cache", "max-age=60"]),
            MAX_AGE_UNSET
        );
    }

    #[test]
    fn test_parse_expires() {
        let want = Utc.with_ymd_and_hms(2023, 1, 11, 12, 8, 21).unwrap();

        assert_eq!(parse_expires(&[]), expires_unset());
        assert_eq!(parse_expires(&["Wed, 11 Jan 2023 12:08:21 GMT"]), want);
        assert_eq!(parse_expires(&["Wed, 11 Jan 2023 12:08:21 UTC"]), want);
        assert_eq!(parse_expires(&[" Wed, 11 Jan 2023 12:08:21 GMT "]), want);
        assert_eq!(parse_expires(&["whatever"]), expires_unset());
    }

    #[test]
    fn test_parse_expires_ignores_weekday_mismatch() {
        assert_eq!(
            parse_expires(&["Thu, 11 Jan 2023 12:08:21 GMT"]),
            Utc.with_ymd_and_hms(2023, 1, 11, 12, 8, 21).unwrap()
        );
    }

    #[test]
    fn test_parse_expires_reads_zone_abbreviation_as_utc() {
        assert_eq!(
            parse_expires(&["Wed, 11 Jan 2023 07:08:21 EST"]),
            Utc.with_ymd_and_hms(2023, 1, 11, 7, 8, 21).unwrap()
        );
    }

    #[test]
    fn test_parse_expires_rejects_near_misses() {
        for value in [
            "11 Jan 2023 12:08:21 GMT",
            "Wed, 11 Jan 2023 12:08:21 +0000",
            "Wed, 11 Jan 23 12:08:21 GMT",
            "Wed, 11 Jan 2023 12:08 GMT",
            "Wed, 1 Jan 2023 12:08:21 GMT",
            "Wed, 11 Jan 2023 12:08:21",
            "Wed, 11 Jan 2023 12:08:21 ",
            "Wdn, 11 Jan 2023 12:08:21 GMT",
            "Wed, 11 Foo 2023 12:08:21 GMT",
            "Wed, 32 Jan 2023 12:08:21 GMT",
            "Wed, 11 Jan 2023 25:08:21 GMT",
            "Wed,  11 Jan 2023 12:08:21 GMT",
        ] {
            assert_eq!(parse_expires(&[value]), expires_unset(), "{value:?}");
        }
    }

    #[test]
    fn test_parse_expires_formatted_timestamp() {
        let stamp = Utc.with_ymd_and_hms(2024, 2, 29, 23, 59, 5).unwrap();
        let formatted = stamp.format("%a, %d %b %Y %H:%M:%S GMT").to_string();
        assert_eq!(formatted, "Thu, 29 Feb 2024 23:59:05 GMT");
        assert_eq!(parse_expires(&[formatted.as_str()]), stamp);
    }

    #[test]
    fn test_header_values_keep_position_of_opaque_values() {
        let mut headers = HeaderMap::new();
        headers.append("cache-control", HeaderValue::from_bytes(b"max-age=\xff").unwrap());
        headers.append("cache-control", HeaderValue::from_static("max-age=60"));

        assert_eq!(header_values(&headers, "Cache-Control"), vec!["", "max-age=60"]);

        let cache = CacheMetadata::from_headers(&headers);
        assert_eq!(cache.max_age, MAX_AGE_UNSET);
    }

    #[test]
    fn test_parse_page_index_from_link() {
        assert_eq!(parse_page_index_from_link(&[TICKERS_LINK], LinkRelation::Next), 2);
        assert_eq!(parse_page_index_from_link(&[TICKERS_LINK], LinkRelation::Last), 63);
        assert_eq!(
            parse_page_index_from_link(&[TICKERS_LINK], LinkRelation::Prev),
            PAGE_UNKNOWN
        );
        assert_eq!(parse_page_index_from_link(&[], LinkRelation::Next), PAGE_UNKNOWN);
    }

    #[test]
    fn test_parse_page_index_from_link_next_only() {
        let link = "<https://api.coingecko.com/api/v3/exchanges?page=2&per_page=100>; rel=\"next\"";
        assert_eq!(parse_page_index_from_link(&[link], LinkRelation::Next), 2);
        assert_eq!(parse_page_index_from_link(&[link], LinkRelation::Last), PAGE_UNKNOWN);
    }

    #[test]
    fn test_parse_page_index_from_link_with_commas_in_query() {
        let link = "<https://x/coins/markets?ids=bitcoin,ethereum&page=5>; rel=\"last\", \
                    <https://x/coins/markets?ids=bitcoin,ethereum&page=3>; rel=\"next\"";
        assert_eq!(parse_page_index_from_link(&[link], LinkRelation::Next), 3);
        assert_eq!(parse_page_index_from_link(&[link], LinkRelation::Last), 5);
    }

    #[test]
    fn test_parse_page_index_from_link_first_match_wins() {
        let link = "<https://x/a?page=abc>; rel=\"next\", <https://x/a?page=4>; rel=\"next\"";
        assert_eq!(parse_page_index_from_link(&[link], LinkRelation::Next), PAGE_UNKNOWN);

        let link = "<https://x/a?page=7>; rel=\"next\", <https://x/a?page=4>; rel=\"next\"";
        assert_eq!(parse_page_index_from_link(&[link], LinkRelation::Next), 7);
    }

    #[test]
    fn test_parse_page_index_from_link_without_page_param() {
        let link = "<https://x/a?per_page=10>; rel=\"next\"";
        assert_eq!(parse_page_index_from_link(&[link], LinkRelation::Next), PAGE_UNKNOWN);
    }

    #[test]
    fn test_compute_page_indices_from_counts() {
        assert_eq!(compute_page_indices_from_counts(1, 6247, 100), (2, 63));
        assert_eq!(compute_page_indices_from_counts(62, 6247, 100), (63, 63));
        assert_eq!(compute_page_indices_from_counts(63, 6247, 100), (-1, 63));
        assert_eq!(compute_page_indices_from_counts(64, 6247, 100), (-1, 63));
        assert_eq!(compute_page_indices_from_counts(-10, 6247, 100), (2, 63));
        assert_eq!(compute_page_indices_from_counts(1, 6200, 100), (2, 62));
    }

    #[test]
    fn test_compute_page_indices_from_counts_unknown() {
        assert_eq!(compute_page_indices_from_counts(1, -1, 100), (-1, -1));
        assert_eq!(compute_page_indices_from_counts(1, 6247, -1), (-1, -1));
        assert_eq!(compute_page_indices_from_counts(1, 6247, 0), (-1, -1));
        assert_eq!(compute_page_indices_from_counts(1, 0, 100), (-1, 0));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(&[], -1), -1);
        assert_eq!(parse_int(&["1"], -1), 1);
        assert_eq!(parse_int(&["100"], -1), 100);
        assert_eq!(parse_int(&["ABC"], -3), -3);
        assert_eq!(parse_int(&["123.3"], -2), -2);
    }

    #[test]
    fn test_cache_metadata_from_headers() {
        let headers = header_map(&[
            ("Cache-Control", "public, max-age=120"),
            ("Expires", "Wed, 11 Jan 2023 12:08:23 GMT"),
        ]);

        let cache = CacheMetadata::from_headers(&headers);
        assert_eq!(cache.max_age, Duration::from_secs(120));
        assert_eq!(
            cache.expires_at,
            Utc.with_ymd_and_hms(2023, 1, 11, 12, 8, 23).unwrap()
        );
        assert_eq!(cache.ttl(), Some(Duration::from_secs(120)));
        assert!(cache.is_expired_at(Utc.with_ymd_and_hms(2023, 1, 11, 12, 8, 23).unwrap()));
        assert!(!cache.is_expired_at(Utc.with_ymd_and_hms(2023, 1, 11, 12, 8, 22).unwrap()));
    }

    #[test]
    fn test_cache_metadata_fields_are_independent() {
        let headers = header_map(&[
            ("Cache-Control", "no-store"),
            ("Expires", "Wed, 11 Jan 2023 12:08:23 GMT"),
        ]);

        let cache = CacheMetadata::from_headers(&headers);
        assert_eq!(cache.ttl(), None);
        assert!(cache.expires().is_some());

        let cache = CacheMetadata::from_headers(&HeaderMap::new());
        assert_eq!(cache, CacheMetadata::default());
        assert!(!cache.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_page_metadata_from_counts() {
        let headers = header_map(&[
            ("Cache-Control", "public, max-age=120"),
            ("Expires", "Wed, 11 Jan 2023 12:08:23 GMT"),
            ("Per-Page", "100"),
            ("Total", "6247"),
        ]);

        for (current_page, want_next) in [(-10, 2), (1, 2), (63, -1), (64, -1)] {
            let page = PageMetadata::from_headers(&headers, current_page);
            assert_eq!(page.index_source, PageIndexSource::Counts);
            assert_eq!(page.cache.max_age, Duration::from_secs(120));
            assert_eq!(page.next_page_index, want_next, "current page {current_page}");
            assert_eq!(page.last_page_index, 63);
            assert_eq!(page.page_size, 100);
            assert_eq!(page.total_count, 6247);
        }
    }

    #[test]
    fn test_page_metadata_prefers_link() {
        let headers = header_map(&[
            ("Link", TICKERS_LINK),
            ("Per-Page", "100"),
            ("Total", "10"),
        ]);

        let page = PageMetadata::from_headers(&headers, 1);
        assert_eq!(page.index_source, PageIndexSource::Link);
        assert_eq!(page.next_page_index, 2);
        assert_eq!(page.last_page_index, 63);
        assert_eq!(page.next_page(), Some(2));
        assert_eq!(page.last_page(), Some(63));
        assert!(page.has_next_page());
    }

    #[test]
    fn test_page_metadata_without_headers() {
        let page = PageMetadata::from_headers(&HeaderMap::new(), 1);
        assert_eq!(page, PageMetadata::default());
        assert_eq!(page.next_page(), None);
        assert!(!page.has_next_page());
    }
}
