//! Offline place-name lookup used when remote geocoding is unavailable.

use crate::models::Coordinates;

/// Tokyo Station: the answer when nothing in the table matches.
pub const DEFAULT_COORDINATES: Coordinates = Coordinates {
    lat: 35.6812,
    lng: 139.7671,
};

const fn c(lat: f64, lng: f64) -> Coordinates {
    Coordinates { lat, lng }
}

/// Major Japanese cities, districts and stations, in lookup order.
pub static FALLBACK_COORDINATES: &[(&str, Coordinates)] = &[
    // Tokyo
    ("東京", c(35.6762, 139.6503)),
    ("東京駅", c(35.6812, 139.7671)),
    ("新宿", c(35.6895, 139.6917)),
    ("新宿駅", c(35.6895, 139.7004)),
    ("渋谷", c(35.6580, 139.7016)),
    ("渋谷駅", c(35.6580, 139.7016)),
    ("池袋", c(35.7295, 139.7109)),
    ("池袋駅", c(35.7295, 139.7109)),
    ("銀座", c(35.6716, 139.7639)),
    ("原宿", c(35.6702, 139.7016)),
    ("六本木", c(35.6626, 139.7310)),
    ("秋葉原", c(35.6985, 139.7730)),
    ("浅草", c(35.7148, 139.7967)),
    ("上野", c(35.7142, 139.7744)),
    ("品川", c(35.6285, 139.7388)),
    ("品川駅", c(35.6285, 139.7388)),
    ("目黒", c(35.6333, 139.7167)),
    ("恵比寿", c(35.6467, 139.7100)),
    ("中目黒", c(35.6433, 139.6983)),
    ("代官山", c(35.6483, 139.7033)),
    ("自由が丘", c(35.6083, 139.6683)),
    ("三軒茶屋", c(35.6433, 139.6717)),
    ("下北沢", c(35.6617, 139.6667)),
    ("吉祥寺", c(35.7033, 139.5792)),
    ("立川", c(35.6983, 139.4133)),
    ("八王子", c(35.6583, 139.3233)),
    ("町田", c(35.5417, 139.4467)),
    // Osaka
    ("大阪", c(34.6937, 135.5023)),
    ("大阪駅", c(34.7024, 135.4959)),
    ("梅田", c(34.7024, 135.4959)),
    ("難波", c(34.6683, 135.5022)),
    ("心斎橋", c(34.6717, 135.5017)),
    ("天王寺", c(34.6575, 135.5033)),
    ("新大阪", c(34.7333, 135.5000)),
    ("京橋", c(34.6967, 135.5333)),
    ("淀屋橋", c(34.6917, 135.5017)),
    ("本町", c(34.6817, 135.5017)),
    ("堺", c(34.5733, 135.4833)),
    // Aichi
    ("名古屋", c(35.1815, 136.9066)),
    ("名古屋駅", c(35.1709, 136.8816)),
    ("栄", c(35.1700, 136.9083)),
    ("大須", c(35.1583, 136.9000)),
    ("金山", c(35.1433, 136.9000)),
    ("千種", c(35.1700, 136.9333)),
    // Fukuoka
    ("福岡", c(33.5902, 130.4017)),
    ("福岡駅", c(33.5902, 130.4203)),
    ("天神", c(33.5900, 130.4017)),
    ("博多", c(33.5900, 130.4200)),
    ("中洲", c(33.5900, 130.4083)),
    // Hokkaido
    ("札幌", c(43.0618, 141.3545)),
    ("札幌駅", c(43.0686, 141.3508)),
    ("大通", c(43.0617, 141.3542)),
    ("すすきの", c(43.0550, 141.3500)),
    ("薄野", c(43.0550, 141.3500)),
    // Kanagawa
    ("横浜", c(35.4437, 139.6380)),
    ("横浜駅", c(35.4658, 139.6228)),
    ("みなとみらい", c(35.4583, 139.6333)),
    ("関内", c(35.4433, 139.6333)),
    ("横浜元町", c(35.4433, 139.6417)),
    ("中華街", c(35.4433, 139.6417)),
    ("川崎", c(35.5300, 139.7000)),
    ("川崎駅", c(35.5300, 139.7000)),
    ("藤沢", c(35.3383, 139.4833)),
    ("茅ヶ崎", c(35.3300, 139.4083)),
    // Kyoto
    ("京都", c(35.0116, 135.7681)),
    ("京都駅", c(34.9858, 135.7588)),
    ("四条河原町", c(35.0033, 135.7683)),
    ("祇園", c(35.0050, 135.7750)),
    ("清水寺", c(34.9947, 135.7850)),
    ("金閣寺", c(35.0394, 135.7292)),
    ("銀閣寺", c(35.0272, 135.7981)),
    // Hyogo
    ("神戸", c(34.6901, 135.1955)),
    ("神戸駅", c(34.6791, 135.1784)),
    ("三宮", c(34.6900, 135.1950)),
    ("神戸元町", c(34.6833, 135.1833)),
    ("北野", c(34.7000, 135.1917)),
    ("六甲", c(34.7167, 135.2333)),
    // Miyagi
    ("仙台", c(38.2688, 140.8721)),
    ("仙台駅", c(38.2600, 140.8824)),
    ("青葉区", c(38.2688, 140.8721)),
    ("宮城野区", c(38.2667, 140.8833)),
    // Hiroshima
    ("広島", c(34.3853, 132.4553)),
    ("広島駅", c(34.3974, 132.4736)),
    ("平和記念公園", c(34.3925, 132.4533)),
    ("原爆ドーム", c(34.3955, 132.4533)),
    // Other major cities
    ("千葉", c(35.6075, 140.1064)),
    ("千葉駅", c(35.6125, 140.1144)),
    ("さいたま", c(35.8614, 139.6456)),
    ("さいたま駅", c(35.8614, 139.6456)),
    ("新潟", c(37.9022, 139.0232)),
    ("新潟駅", c(37.9122, 139.0332)),
    ("静岡", c(34.9769, 138.3831)),
    ("静岡駅", c(34.9769, 138.3831)),
    ("浜松", c(34.7108, 137.7261)),
    ("浜松駅", c(34.7108, 137.7261)),
    ("岡山", c(34.6617, 133.9350)),
    ("岡山駅", c(34.6617, 133.9350)),
    ("熊本", c(32.7898, 130.7414)),
    ("熊本駅", c(32.7898, 130.7414)),
    ("鹿児島", c(31.5602, 130.5581)),
    ("鹿児島駅", c(31.5602, 130.5581)),
    ("那覇", c(26.2124, 127.6809)),
    ("那覇駅", c(26.2124, 127.6809)),
];

/// Lowercase and drop all whitespace (including the ideographic space U+3000)
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Resolve an address against the table.
///
/// An exact (normalized) name wins; otherwise the first entry where either
/// string contains the other. The substring rule is deliberately loose, so a
/// short name can match inside an unrelated longer address.
pub fn lookup(address: &str) -> Option<(&'static str, Coordinates)> {
    let normalized = normalize(address);
    if normalized.is_empty() {
        return None;
    }

    let entries = || {
        FALLBACK_COORDINATES
            .iter()
            .map(|(name, coords)| (*name, normalize(name), *coords))
    };

    entries()
        .find(|(_, key, _)| *key == normalized)
        .or_else(|| {
            entries().find(|(_, key, _)| normalized.contains(key.as_str()) || key.contains(&normalized))
        })
        .map(|(name, _, coords)| (name, coords))
}

/// Table lookup with the Tokyo Station default
pub fn resolve(address: &str) -> Coordinates {
    match lookup(address) {
        Some((name, coords)) => {
            tracing::debug!(address, matched = name, "Using fallback coordinates");
            coords
        }
        None => {
            tracing::debug!(address, "No fallback entry matched, using default coordinates");
            DEFAULT_COORDINATES
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_resolves_to_its_own_coordinates() {
        for (name, coords) in FALLBACK_COORDINATES {
            assert_eq!(resolve(name), *coords, "key {}", name);
        }
    }

    #[test]
    fn tokyo_station_beats_tokyo() {
        assert_eq!(resolve("東京駅"), c(35.6812, 139.7671));
        assert_eq!(resolve("東京"), c(35.6762, 139.6503));
    }

    #[test]
    fn substring_in_longer_address_matches() {
        // "東京都渋谷区" contains "東京" which comes first in table order
        assert_eq!(resolve("東京都渋谷区道玄坂"), c(35.6762, 139.6503));
        assert_eq!(resolve("京都市 祇園 花見小路"), c(35.0116, 135.7681));
    }

    #[test]
    fn partial_input_matches_longer_key() {
        // "みなと" is contained in "みなとみらい"
        assert_eq!(resolve("みなと"), c(35.4583, 139.6333));
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(resolve(" 池袋\u{3000}駅 "), c(35.7295, 139.7109));
    }

    #[test]
    fn unknown_address_uses_default() {
        assert_eq!(resolve("1600 Pennsylvania Avenue"), DEFAULT_COORDINATES);
    }

    #[test]
    fn blank_address_uses_default() {
        assert_eq!(resolve(""), DEFAULT_COORDINATES);
        assert_eq!(resolve(" \u{3000}\t"), DEFAULT_COORDINATES);
        assert!(lookup("").is_none());
    }

    #[test]
    fn normalize_lowercases_and_strips() {
        assert_eq!(normalize(" Tokyo\u{3000}Station "), "tokyostation");
    }
}
