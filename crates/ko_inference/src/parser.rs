use ko_core::ArticleAnalysis;

/// Which section of the reply the scanner is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Pros,
    Cons,
    Outline,
}

const PROS_MARKERS: &[&str] = &["優點", "好處"];
const CONS_MARKERS: &[&str] = &["缺點", "壞處", "可改進"];
const OUTLINE_MARKERS: &[&str] = &["H2", "H3", "文章架構", "大綱"];

/// Checks a line against the section markers in fixed priority order:
/// pros first, then cons, then outline. Only the first match counts.
fn section_trigger(line: &str) -> Option<Section> {
    if PROS_MARKERS.iter().any(|m| line.contains(m)) {
        Some(Section::Pros)
    } else if CONS_MARKERS.iter().any(|m| line.contains(m)) {
        Some(Section::Cons)
    } else if OUTLINE_MARKERS.iter().any(|m| line.contains(m)) {
        Some(Section::Outline)
    } else {
        None
    }
}

fn strip_bullet(line: &str) -> String {
    line.trim_start_matches(['-', ' ']).to_string()
}

/// Parses a semi-structured model reply into pros, cons and outline.
///
/// The section mode is re-evaluated on every line, so a pros or cons
/// marker appearing after the outline section switches back out of it;
/// outline text captured so far is kept. In pros/cons mode only
/// bulleted lines are collected; in outline mode every line is captured
/// verbatim, the heading line included. Splitting on '\n' means a reply
/// with a trailing newline contributes one final empty outline line.
///
/// Never fails: a reply with no recognized markers parses to the empty
/// analysis.
pub fn parse_analysis(text: &str) -> ArticleAnalysis {
    let mut result = ArticleAnalysis::default();
    let mut section = Section::None;

    for line in text.split('\n') {
        if let Some(next) = section_trigger(line) {
            section = next;
        }

        match section {
            Section::Pros if line.starts_with('-') => result.pros.push(strip_bullet(line)),
            Section::Cons if line.starts_with('-') => result.cons.push(strip_bullet(line)),
            Section::Outline => {
                result.outline.push_str(line);
                result.outline.push('\n');
            }
            _ => {}
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_markers_yields_empty_analysis() {
        let reply = "Just some prose.\nNothing structured here.\n";
        let analysis = parse_analysis(reply);
        assert!(analysis.pros.is_empty());
        assert!(analysis.cons.is_empty());
        assert_eq!(analysis.outline, "");
    }

    #[test]
    fn test_pros_bullets_are_collected_and_stripped() {
        let reply = "### 優點\n- first\n- second\n-  third\n";
        let analysis = parse_analysis(reply);
        assert_eq!(analysis.pros, vec!["first", "second", "third"]);
        assert!(analysis.cons.is_empty());
    }

    #[test]
    fn test_bullet_stripping_removes_all_leading_hyphens_and_spaces() {
        let analysis = parse_analysis("好處\n-- - x\n");
        assert_eq!(analysis.pros, vec!["x"]);
    }

    #[test]
    fn test_non_bulleted_lines_skipped_in_pros_and_cons() {
        let reply = "優點\nsome commentary\n- kept\n\n缺點\nmore commentary\n- also kept\n";
        let analysis = parse_analysis(reply);
        assert_eq!(analysis.pros, vec!["kept"]);
        assert_eq!(analysis.cons, vec!["also kept"]);
    }

    #[test]
    fn test_outline_capture_is_greedy() {
        let reply = "### 大綱\nH2: Section\nplain continuation line\n";
        let analysis = parse_analysis(reply);
        assert_eq!(
            analysis.outline,
            "### 大綱\nH2: Section\nplain continuation line\n\n"
        );
    }

    #[test]
    fn test_later_pros_marker_switches_back_out_of_outline() {
        let reply = "### 大綱\nH2: kept\n### 優點\n- late pro";
        let analysis = parse_analysis(reply);
        assert_eq!(analysis.outline, "### 大綱\nH2: kept\n");
        assert_eq!(analysis.pros, vec!["late pro"]);
    }

    #[test]
    fn test_trigger_priority_is_pros_then_cons_then_outline() {
        // A line naming both sections lands in the first-priority one.
        let reply = "優點與缺點\n- goes to pros\n";
        let analysis = parse_analysis(reply);
        assert_eq!(analysis.pros, vec!["goes to pros"]);
        assert!(analysis.cons.is_empty());
    }

    #[test]
    fn test_idempotent() {
        let reply = "### 優點\n- a\n### 缺點\n- b\n### 大綱\nH2: c\n";
        assert_eq!(parse_analysis(reply), parse_analysis(reply));
    }

    #[test]
    fn test_full_reply_golden_case() {
        let reply = "### 優點\n- A good point\n\n### 缺點\n- A gap\n\n### 大綱\nH2: Intro\nH3: Detail\n";
        let analysis = parse_analysis(reply);
        assert_eq!(analysis.pros, vec!["A good point"]);
        assert_eq!(analysis.cons, vec!["A gap"]);
        assert_eq!(analysis.outline, "### 大綱\nH2: Intro\nH3: Detail\n\n");
    }
}
