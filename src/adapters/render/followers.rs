//! Recent followers list.

use super::markup::html_escape;
use crate::domain::github::FollowerRef;

/// Renders avatar links for each follower. Empty input renders nothing.
pub fn render_followers(followers: &[FollowerRef]) -> String {
    if followers.is_empty() {
        return String::new();
    }

    let items: String = followers
        .iter()
        .map(|f| {
            let login = html_escape(&f.login);
            format!(
                r#"<a href="{url}" target="_blank" rel="noopener" class="follower-item"><img src="{avatar}" alt="{login}" class="follower-avatar"><span>{login}</span></a>"#,
                url = html_escape(&f.html_url),
                avatar = html_escape(&f.avatar_url),
            )
        })
        .collect();

    format!(
        r#"<div class="tech-usage-container"><div class="tech-usage-title">Recent Followers</div><div class="gh-followers-list">{items}</div></div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_link_per_follower() {
        let followers = vec![
            FollowerRef {
                login: "hubot".to_string(),
                avatar_url: "https://avatars.example/hubot".to_string(),
                html_url: "https://github.com/hubot".to_string(),
            },
            FollowerRef {
                login: "mona".to_string(),
                avatar_url: "https://avatars.example/mona".to_string(),
                html_url: "https://github.com/mona".to_string(),
            },
        ];

        let html = render_followers(&followers);

        assert_eq!(html.matches("follower-item").count(), 2);
        assert!(html.contains(r#"<span>mona</span>"#));
    }

    #[test]
    fn no_followers_renders_nothing() {
        assert_eq!(render_followers(&[]), "");
    }
}
