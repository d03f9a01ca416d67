// ==========================================
// 控制台输入规范化
// ==========================================

/// 单词首字母大写, 其余字母小写
///
/// 字母紧跟在非字母之后即视为单词开头, 例如
/// "fire truck" -> "Fire Truck", "MEDICAL-team" -> "Medical-Team"
pub fn title_case(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut prev_is_alpha = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            result.push(c);
            prev_is_alpha = false;
        }
    }
    result
}

/// 解析逗号分隔的资源需求
///
/// 每项去掉首尾空白并做首字母大写, 空项丢弃
pub fn parse_required_resources(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(title_case)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("fire truck"), "Fire Truck");
        assert_eq!(title_case("AMBULANCE"), "Ambulance");
        assert_eq!(title_case("medical-team"), "Medical-Team");
        assert_eq!(title_case("4x4 unit"), "4X4 Unit");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_parse_required_resources() {
        assert_eq!(
            parse_required_resources("Ambulance, medical team"),
            vec!["Ambulance", "Medical Team"]
        );
        assert_eq!(
            parse_required_resources("ambulance,,  ambulance "),
            vec!["Ambulance", "Ambulance"]
        );
        assert!(parse_required_resources("").is_empty());
        assert!(parse_required_resources(" , ").is_empty());
    }
}
