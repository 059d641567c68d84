use retonfa::Regex;

fn check(pattern: &str, accepted: &[&str], rejected: &[&str]) -> anyhow::Result<()> {
    crate::init_logging();
    let re = Regex::new(pattern)?;
    for candidate in accepted {
        anyhow::ensure!(re.is_match(candidate), "{:?} should accept {:?}", pattern, candidate);
    }
    for candidate in rejected {
        anyhow::ensure!(!re.is_match(candidate), "{:?} should reject {:?}", pattern, candidate);
    }
    Ok(())
}

#[test]
fn closure_then_literal_word() -> anyhow::Result<()> {
    check(
        "(a|b)*(abcdef)",
        &["abcdef", "aabcdef", "babcdef", "ababbaabcdef"],
        &["abcde", "abcdefg", "xyz"],
    )
}

#[test]
fn single_closure() -> anyhow::Result<()> {
    check("a*", &["", "aaaa"], &["ab"])
}

#[test]
fn concatenation_binds_tighter_than_alternation() -> anyhow::Result<()> {
    check("ab|c", &["ab", "c"], &["a", "b", "abc"])
}

#[test]
fn grouped_alternation_then_terminal() -> anyhow::Result<()> {
    check("(a|b)c", &["ac", "bc"], &["c", "ab"])
}

#[test]
fn empty_candidate() -> anyhow::Result<()> {
    check("a*", &[""], &[])?;
    check("a", &[], &[""])
}

#[test]
fn blanks_are_ignored() -> anyhow::Result<()> {
    check(" ( a | b ) * c ", &["c", "abbac"], &["a b c", "ab"])
}

#[test]
fn nested_closures() -> anyhow::Result<()> {
    check(
        "((a|b)*c)*|d",
        &["", "c", "abc", "cc", "abcbac", "d"],
        &["ab", "dd", "cd", "abcd"],
    )
}

#[test]
fn alternation_chain() -> anyhow::Result<()> {
    check("a|b|cd|e*", &["a", "b", "cd", "", "eee"], &["c", "ab", "ee e"])
}

#[test]
fn matches_are_whole_string() -> anyhow::Result<()> {
    check("abc", &["abc"], &["xabc", "abcx", "ab", "bc"])
}

#[test]
fn transition_table_dump() -> anyhow::Result<()> {
    let re = Regex::new("a|b")?;
    let dump = re.table().to_string();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines[0], "state | ε       | a       | b       |");
    assert_eq!(lines[3], "    1 | 2 4     |         |         |");
    assert_eq!(lines.len(), 2 + re.nfa().state_count());
    Ok(())
}

#[test]
fn skipping_a_closure_does_not_reenter_its_body() -> anyhow::Result<()> {
    check("(ab*)*", &["", "a", "ab", "abba", "aab"], &["b", "bb", "ba"])?;
    check("(ba*)*", &["", "b", "baab", "bb"], &["a", "aa", "ab"])
}
