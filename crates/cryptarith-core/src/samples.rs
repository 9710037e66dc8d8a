//! Built-in catalogue of classic puzzles.

/// Classic decimal puzzles as `(name, text)` pairs.
///
/// Names are the lowercase puzzle text with `+` and `=` replaced by `-`.
pub const SAMPLE_PUZZLES: &[(&str, &str)] = &[
    ("send-more-money", "SEND+MORE=MONEY"),
    ("basic-logic-pascal", "BASIC+LOGIC=PASCAL"),
    ("crack-hack-error", "CRACK+HACK=ERROR"),
    ("pear-apple-grape", "PEAR+APPLE=GRAPE"),
    ("cracks-tracks-racket", "CRACKS+TRACKS=RACKET"),
    ("tried-ride-steer", "TRIED+RIDE=STEER"),
    ("deemed-sense-system", "DEEMED+SENSE=SYSTEM"),
    ("down-www-error", "DOWN+WWW=ERROR"),
    ("barrel-brooms-shovels", "BARREL+BROOMS=SHOVELS"),
    ("lynne-looks-sleepy", "LYNNE+LOOKS=SLEEPY"),
    ("stars-rate-treat", "STARS+RATE=TREAT"),
    ("days-too-short", "DAYS+TOO=SHORT"),
    ("base-ball-games", "BASE+BALL=GAMES"),
    ("memo-from-homer", "MEMO+FROM=HOMER"),
    ("is-this-here", "IS+THIS=HERE"),
    ("here-she-comes", "HERE+SHE=COMES"),
];

/// Looks up a sample puzzle text by name, ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use cryptarith_core::find_sample;
///
/// assert_eq!(find_sample("SEND-MORE-MONEY"), Some("SEND+MORE=MONEY"));
/// assert_eq!(find_sample("no-such-puzzle"), None);
/// ```
#[must_use]
pub fn find_sample(name: &str) -> Option<&'static str> {
    SAMPLE_PUZZLES
        .iter()
        .find(|(sample, _)| sample.eq_ignore_ascii_case(name))
        .map(|&(_, text)| text)
}
