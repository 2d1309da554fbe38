use ghissues::github::models::{
    Issue, IssueFilter, IssueQuery, PAGE_SIZE, Pagination, RepoId, Repository,
};
use ghissues::util::browser::is_web_url;

#[test]
fn test_parse_repo_id() {
    let repo: RepoId = "facebook/react".parse().unwrap();
    assert_eq!(repo.owner, "facebook");
    assert_eq!(repo.name, "react");
    assert_eq!(repo.full_name(), "facebook/react");
}

#[test]
fn test_parse_percent_encoded_repo_id() {
    let repo: RepoId = "rust-lang%2Frust".parse().unwrap();
    assert_eq!(repo, RepoId::new("rust-lang", "rust"));
    let repo: RepoId = "rust-lang%2frust".parse().unwrap();
    assert_eq!(repo, RepoId::new("rust-lang", "rust"));
}

#[test]
fn test_parse_invalid_repo_ids() {
    for input in ["", "react", "/react", "facebook/", "a/b/c"] {
        assert!(input.parse::<RepoId>().is_err(), "accepted {input:?}");
    }
}

#[test]
fn test_parse_rejects_characters_that_alter_the_url() {
    for input in ["a/b?x=1", "a/b#frag", "own er/repo", "a/b%20c", "..%2F../x", "a/b&page=2"] {
        assert!(input.parse::<RepoId>().is_err(), "accepted {input:?}");
    }
}

#[test]
fn test_parse_accepts_dots_underscores_and_dashes() {
    let repo: RepoId = "rust-lang/rust.vim_1".parse().unwrap();
    assert_eq!(repo, RepoId::new("rust-lang", "rust.vim_1"));
}

#[test]
fn test_repo_paths() {
    let repo = RepoId::new("facebook", "react");
    assert_eq!(repo.repo_path(), "/repos/facebook/react");
    assert_eq!(repo.issues_path(), "/repos/facebook/react/issues");
    assert_eq!(repo.html_url(), "https://github.com/facebook/react");
}

#[test]
fn test_filter_cycle_and_strings() {
    assert_eq!(IssueFilter::default(), IssueFilter::All);
    assert_eq!(IssueFilter::All.cycle(), IssueFilter::Open);
    assert_eq!(IssueFilter::Open.cycle(), IssueFilter::Closed);
    assert_eq!(IssueFilter::Closed.cycle(), IssueFilter::All);
    assert_eq!(IssueFilter::Closed.as_str(), "closed");
    assert_eq!(
        serde_json::to_string(&IssueFilter::Open).unwrap(),
        "\"open\""
    );
}

#[test]
fn test_pagination_defaults() {
    let p = Pagination::default();
    assert_eq!(p.page, 1);
    assert_eq!(p.limit, PAGE_SIZE);
    assert_eq!(PAGE_SIZE, 5);
    assert!(!p.can_go_previous());
    assert!(Pagination { page: 2, limit: 5 }.can_go_previous());
}

#[test]
fn test_query_params_order() {
    let q = IssueQuery::new(IssueFilter::Closed, Pagination { page: 3, limit: 5 });
    assert_eq!(
        q.params(),
        vec![
            ("state", "closed".to_string()),
            ("per_page", "5".to_string()),
            ("page", "3".to_string()),
        ]
    );
}

#[test]
fn test_deserialize_repository() {
    let json = r#"{
        "id": 10270250,
        "name": "react",
        "full_name": "facebook/react",
        "description": "The library for web and native user interfaces.",
        "html_url": "https://github.com/facebook/react",
        "owner": {
            "login": "facebook",
            "id": 69631,
            "avatar_url": "https://avatars.githubusercontent.com/u/69631?v=4"
        },
        "stargazers_count": 220000
    }"#;
    let repo: Repository = serde_json::from_str(json).unwrap();
    assert_eq!(repo.name, "react");
    assert_eq!(repo.owner.login, "facebook");
    assert_eq!(
        repo.description.as_deref(),
        Some("The library for web and native user interfaces.")
    );
    assert_eq!(
        repo.html_url.as_deref(),
        Some("https://github.com/facebook/react")
    );
}

#[test]
fn test_deserialize_repository_without_description() {
    let json = r#"{
        "name": "empty",
        "description": null,
        "owner": { "login": "me", "avatar_url": "https://example.com/a.png" }
    }"#;
    let repo: Repository = serde_json::from_str(json).unwrap();
    assert!(repo.description.is_none());
    assert!(repo.html_url.is_none());
}

#[test]
fn test_deserialize_issue_list_keeps_label_order() {
    let json = r#"[
        {
            "id": 1,
            "number": 42,
            "title": "Crash on startup",
            "html_url": "https://github.com/o/r/issues/42",
            "state": "open",
            "user": { "login": "alice", "avatar_url": "https://example.com/alice.png" },
            "labels": [
                { "id": 7, "name": "bug", "color": "d73a4a" },
                { "id": 3, "name": "p1", "color": "ffffff" }
            ],
            "updated_at": "2024-05-01T10:00:00Z"
        },
        {
            "id": 2,
            "title": "Docs typo",
            "html_url": "https://github.com/o/r/issues/43",
            "user": { "login": "bob", "avatar_url": "https://example.com/bob.png" },
            "labels": []
        }
    ]"#;
    let issues: Vec<Issue> = serde_json::from_str(json).unwrap();
    assert_eq!(issues.len(), 2);

    let names: Vec<&str> = issues[0].labels.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["bug", "p1"]);
    assert_eq!(issues[0].number, Some(42));
    assert!(issues[0].updated_at.is_some());

    assert_eq!(issues[1].user.login, "bob");
    assert!(issues[1].labels.is_empty());
    assert!(issues[1].number.is_none());
}

#[test]
fn test_web_url_check() {
    assert!(is_web_url("https://github.com/o/r/issues/1"));
    assert!(!is_web_url("file:///etc/passwd"));
}
