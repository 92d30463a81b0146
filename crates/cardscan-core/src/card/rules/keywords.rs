//! Keyword tables for business card field detection.
//!
//! Extractors walk these tables in order and stop at the first keyword a
//! line contains, so earlier entries win over later ones.

/// Legal-entity markers identifying a company line.
pub const COMPANY_KEYWORDS: &[&str] = &[
    "주식회사",
    "(주)",
    "㈜",
    "I주I", // OCR misread of (주)
    "|주|", // OCR misread of (주), vertical bars
    "유한회사",
    "(유)",
    "Co.,Ltd",
    "Co., Ltd.",
    "Corporation",
    "Corp.",
    "Inc.",
    "LLC",
    "Ltd.",
    "Group",
    "컴퍼니",
    "기업",
    "회사",
];

/// Job titles, senior executive titles first.
pub const TITLE_KEYWORDS: &[&str] = &[
    "대표이사",
    "대표",
    "회장",
    "부회장",
    "사장",
    "부사장",
    "전무",
    "상무",
    "이사",
    "부장",
    "차장",
    "과장",
    "대리",
    "주임",
    "사원",
    "팀장",
    "실장",
    "본부장",
    "센터장",
    "소장",
    "원장",
    "CEO",
    "CTO",
    "CFO",
    "COO",
    "CIO",
    "Director",
    "Manager",
    "Engineer",
    "Developer",
    "Designer",
    "Consultant",
];

/// Department names.
pub const DEPARTMENT_KEYWORDS: &[&str] = &[
    "경영",
    "기획",
    "개발",
    "연구",
    "마케팅",
    "영업",
    "총무",
    "인사",
    "재무",
    "회계",
    "IT",
    "디자인",
    "Team",
    "Dept",
    "Division",
];

/// OCR misreads of the `(주)` marker and their canonical form.
pub const CORPORATE_MARKER_MISREADS: &[&str] = &["I주I", "|주|"];

/// Canonical short form of 주식회사.
pub const CORPORATE_MARKER: &str = "(주)";

/// Check whether a string is exactly a title keyword.
pub fn is_title_keyword(s: &str) -> bool {
    TITLE_KEYWORDS.contains(&s)
}

/// Check whether a line mentions any title keyword.
pub fn contains_title_keyword(line: &str) -> bool {
    TITLE_KEYWORDS.iter().any(|k| line.contains(k))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_keyword_membership() {
        assert!(is_title_keyword("대표이사"));
        assert!(is_title_keyword("CEO"));
        assert!(!is_title_keyword("홍길동"));
        // Containment is not membership
        assert!(!is_title_keyword("대표이사님"));
        assert!(contains_title_keyword("개발팀 팀장"));
    }

    #[test]
    fn test_table_priority() {
        // 대표이사 must be tried before its substrings
        let pos = |k: &str| TITLE_KEYWORDS.iter().position(|t| *t == k).unwrap();
        assert!(pos("대표이사") < pos("대표"));
        assert!(pos("대표이사") < pos("이사"));

        let pos = |k: &str| COMPANY_KEYWORDS.iter().position(|t| *t == k).unwrap();
        assert!(pos("주식회사") < pos("회사"));
        assert!(pos("유한회사") < pos("회사"));
    }
}
