//! Output tests for notices

use insta::assert_snapshot;

use github_activity::model::Notice;
use github_activity::ui::Console;

fn print(notice: &Notice) -> String {
    let mut console = Console::new(Vec::new(), false, None);
    console.notice(notice).unwrap();
    String::from_utf8(console.into_inner()).unwrap()
}

#[test]
fn test_notice_tiers() {
    let output = [
        Notice::info("Fetching activity for octocat..."),
        Notice::warning("octocat has no recent activity..."),
        Notice::error("User 'octocat' not found"),
    ]
    .iter()
    .map(print)
    .collect::<String>();

    assert_snapshot!(output, @r"
    Fetching activity for octocat...
    octocat has no recent activity...
    Error: User 'octocat' not found
    ");
}

#[test]
fn test_colored_notices_differ_by_tier() {
    let colored = |notice: &Notice| {
        let mut console = Console::new(Vec::new(), true, None);
        console.notice(notice).unwrap();
        String::from_utf8(console.into_inner()).unwrap()
    };

    let info = colored(&Notice::info("same"));
    let warning = colored(&Notice::warning("same"));
    let error = colored(&Notice::error("same"));

    assert_ne!(info, warning);
    assert_ne!(warning, error);
    assert!(error.contains("Error: same"));
}
