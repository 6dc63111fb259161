use crate::constants::MAX_ADDRESS_SUGGESTIONS;

/// Well-known stations and districts offered while the user types.
pub static COMMON_ADDRESSES: &[&str] = &[
    "東京駅", "新宿駅", "渋谷駅", "池袋駅", "銀座", "原宿", "六本木", "秋葉原", "浅草", "上野",
    "品川駅", "目黒", "恵比寿", "中目黒", "代官山", "自由が丘", "三軒茶屋", "下北沢", "吉祥寺",
    "立川", "八王子", "町田", "大阪駅", "梅田", "難波", "心斎橋", "天王寺", "新大阪", "京橋",
    "淀屋橋", "本町", "堺", "名古屋駅", "栄", "大須", "金山", "千種", "福岡駅", "天神", "博多",
    "中洲", "札幌駅", "大通", "すすきの", "薄野", "横浜駅", "みなとみらい", "関内", "横浜元町",
    "中華街", "川崎駅", "藤沢", "茅ヶ崎", "京都駅", "四条河原町", "祇園", "清水寺", "金閣寺",
    "銀閣寺", "神戸駅", "三宮", "神戸元町", "北野", "六甲", "仙台駅", "青葉区", "宮城野区",
    "広島駅", "平和記念公園", "原爆ドーム", "千葉駅", "さいたま駅", "新潟駅", "静岡駅", "浜松駅",
    "岡山駅", "熊本駅", "鹿児島駅", "那覇駅",
];

/// Case-insensitive substring filter over [`COMMON_ADDRESSES`], in list
/// order, capped at `MAX_ADDRESS_SUGGESTIONS`. Blank input suggests nothing.
pub fn suggest(input: &str) -> Vec<&'static str> {
    if input.trim().is_empty() {
        return Vec::new();
    }

    let needle = input.to_lowercase();
    COMMON_ADDRESSES
        .iter()
        .copied()
        .filter(|address| address.to_lowercase().contains(&needle))
        .take(MAX_ADDRESS_SUGGESTIONS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_input_suggests_nothing() {
        assert!(suggest("").is_empty());
        assert!(suggest("  ").is_empty());
    }

    #[test]
    fn matches_keep_list_order() {
        assert_eq!(suggest("駅")[..3], ["東京駅", "新宿駅", "渋谷駅"]);
    }

    #[test]
    fn at_most_five_suggestions() {
        assert_eq!(suggest("駅").len(), 5);
    }

    #[test]
    fn substring_anywhere() {
        assert_eq!(suggest("河原"), vec!["四条河原町"]);
        assert_eq!(suggest("閣寺"), vec!["金閣寺", "銀閣寺"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(suggest("Paris").is_empty());
    }
}
