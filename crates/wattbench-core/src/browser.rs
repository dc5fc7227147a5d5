use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The browsers a measurement run can target.
///
/// All three are Chromium-family and speak the DevTools protocol, so a
/// single driver covers the whole set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserKind {
    Chrome,
    Chromium,
    Edge,
}

impl BrowserKind {
    pub const ALL: [BrowserKind; 3] = [BrowserKind::Chrome, BrowserKind::Chromium, BrowserKind::Edge];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrowserKind::Chrome => "chrome",
            BrowserKind::Chromium => "chromium",
            BrowserKind::Edge => "edge",
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrowserKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "chrome" => Ok(BrowserKind::Chrome),
            "chromium" => Ok(BrowserKind::Chromium),
            "edge" => Ok(BrowserKind::Edge),
            _ => Err(Error::UnknownBrowser {
                name: s.to_string(),
                known: BrowserKind::ALL
                    .iter()
                    .map(|b| b.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_browsers_case_insensitively() {
        assert_eq!("chrome".parse::<BrowserKind>().unwrap(), BrowserKind::Chrome);
        assert_eq!("Chromium".parse::<BrowserKind>().unwrap(), BrowserKind::Chromium);
        assert_eq!("EDGE".parse::<BrowserKind>().unwrap(), BrowserKind::Edge);
    }

    #[test]
    fn rejects_unknown_browser_with_the_known_set() {
        let err = "safari".parse::<BrowserKind>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("safari"));
        assert!(message.contains("chrome, chromium, edge"));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for kind in BrowserKind::ALL {
            assert_eq!(kind.to_string().parse::<BrowserKind>().unwrap(), kind);
        }
    }
}
