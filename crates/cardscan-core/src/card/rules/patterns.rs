//! Common regex patterns for business card extraction.

use lazy_static::lazy_static;
use regex::Regex;

use super::keywords::{COMPANY_KEYWORDS, TITLE_KEYWORDS};

lazy_static! {
    // Korean name: 2-4 Hangul syllables ending at whitespace or end of line
    pub static ref KOREAN_NAME: Regex = Regex::new(
        r"([가-힣]{2,4})(?:\s|$)"
    ).unwrap();

    // English name: Firstname Lastname
    pub static ref ENGLISH_NAME: Regex = Regex::new(
        r"[A-Z][a-z]+\s[A-Z][a-z]+"
    ).unwrap();

    // Company keyword with the surrounding name, one pattern per keyword
    pub static ref COMPANY_KEYWORD_PATTERNS: Vec<(&'static str, Regex)> = COMPANY_KEYWORDS
        .iter()
        .map(|keyword| {
            let pattern = format!(
                r"[가-힣a-zA-Z0-9()㈜|\s]*{}[가-힣a-zA-Z0-9\s]*",
                regex::escape(keyword)
            );
            (*keyword, Regex::new(&pattern).unwrap())
        })
        .collect();

    // Unmarked company: 3+ Hangul syllables, optional legal suffix
    pub static ref COMPANY_FALLBACK: Regex = Regex::new(
        r"[가-힣]{3,}(?:주식회사|㈜|\(주\)|회사|기업|그룹|컴퍼니)?"
    ).unwrap();

    // Title keyword with a preceding department or qualifier
    pub static ref TITLE_KEYWORD_PATTERNS: Vec<(&'static str, Regex)> = TITLE_KEYWORDS
        .iter()
        .map(|keyword| {
            let pattern = format!(r"[가-힣a-zA-Z\s]*{}", regex::escape(keyword));
            (*keyword, Regex::new(&pattern).unwrap())
        })
        .collect();

    // Email pattern
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Korean mobile: 010-1234-5678, +82-10-1234-5678, +82. 106430.0932
    // Separators (hyphen, dot, space) are optional and may be mixed
    pub static ref MOBILE: Regex = Regex::new(
        r"(?:\+82[-.\s]*)?0?10[-.\s]*\d{3,4}[-.\s]*\d{4}"
    ).unwrap();

    // Korean landline: 02-123-4567, 031.1234.5678
    pub static ref LANDLINE: Regex = Regex::new(
        r"0\d{1,2}[-.\s]*\d{3,4}[-.\s]*\d{4}"
    ).unwrap();

    // Labeled fax number
    pub static ref FAX: Regex = Regex::new(
        r"(?i)fax[\s:]*0\d{1,2}[-.\s]?\d{3,4}[-.\s]?\d{4}"
    ).unwrap();

    pub static ref FAX_LABEL: Regex = Regex::new(
        r"(?i)fax[\s:]*"
    ).unwrap();

    pub static ref PHONE_SEPARATOR: Regex = Regex::new(
        r"[-.\s]"
    ).unwrap();

    // Website: www.example.com, http://example.co.kr
    pub static ref WEBSITE: Regex = Regex::new(
        r"(?:https?://)?(?:www\.)?[a-zA-Z0-9-]+\.[a-zA-Z]{2,}(?:\.[a-zA-Z]{2,})?"
    ).unwrap();

    // Korean address starting at a province or metropolitan city
    pub static ref ADDRESS: Regex = Regex::new(
        r"(?s)(?:서울|부산|대구|인천|광주|대전|울산|세종|경기|강원|충북|충남|전북|전남|경북|경남|제주)(?:특별자치시|특별자치도|특별시|광역시|시|도)?.{5,}"
    ).unwrap();
}
