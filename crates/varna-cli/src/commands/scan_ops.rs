use varna_core::tokenizer::{self, ScanResult, TokenKind};

use super::CommandError;

pub fn scan_cmd(text: &str, json: bool) -> Result<(), CommandError> {
    let result = tokenizer::scan(text);
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", format_scan(&result));
    }
    Ok(())
}

pub fn format_scan(result: &ScanResult) -> String {
    let mut out = String::new();
    for token in result.tokens() {
        let kind = match token.kind {
            TokenKind::Onset => "onset",
            TokenKind::Nucleus => "nucleus",
        };
        out.push_str(&format!(
            "{:<8} {:>3}..{:<3} {}\n",
            kind,
            token.offset,
            token.end(),
            token.text
        ));
    }
    out.push_str(&format!(
        "{} tokens, {} skipped\n",
        result.token_count(),
        result.skipped()
    ));
    out
}
