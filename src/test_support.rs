//! Listing markup for tests, shaped like the live question list.

pub fn question_item(
    title: &str,
    tags: &[&str],
    votes: Option<&str>,
    timestamp: Option<&str>,
) -> String {
    let tags: String = tags
        .iter()
        .map(|tag| format!(r#"<li><a href="/questions/tagged/{tag}" class="post-tag">{tag}</a></li>"#))
        .collect();
    let votes = votes
        .map(|votes| {
            format!(
                r#"<div class="s-post-summary--stats-item s-post-summary--stats-item__emphasized"><span class="s-post-summary--stats-item-number">{votes}</span><span>votes</span></div>"#
            )
        })
        .unwrap_or_default();
    let timestamp = timestamp
        .map(|timestamp| {
            format!(r#"<time>asked <span title="{timestamp}" class="relativetime">1 min ago</span></time>"#)
        })
        .unwrap_or_default();

    format!(
        r#"<div class="s-post-summary--content">{votes}<h3 class="s-post-summary--content-title"><a href="/questions/1" class="s-link">{title}</a></h3><div class="s-post-summary--meta"><ul>{tags}</ul>{timestamp}</div></div>"#
    )
}

pub fn untitled_item() -> String {
    r#"<div class="s-post-summary--content"><h3></h3><ul><li><a class="post-tag">javascript</a></li></ul></div>"#
        .to_string()
}

pub fn numbered_items(range: std::ops::Range<usize>) -> Vec<String> {
    range
        .map(|n| question_item(&format!("Question {}", n), &["javascript"], Some("1"), None))
        .collect()
}

pub fn listing_page(items: &[String], has_next: bool) -> String {
    let next = match has_next {
        true => r#"<a class="s-pagination--item js-pagination-item" href="/questions?page=2" rel="next">Next</a>"#,
        false => "",
    };

    format!(
        r#"<html><body><div id="questions">{}</div><div class="s-pagination"><a class="s-pagination--item is-selected">1</a>{}</div></body></html>"#,
        items.concat(),
        next
    )
}

pub fn filterable_listing_page(items: &[String], has_next: bool) -> String {
    let controls = r#"<button id="onetrust-accept-btn-handler">Accept all cookies</button><button aria-controls="uql-form">Filter</button><form id="uql-form"><input name="tagQuery"><button type="submit">Apply filter</button></form>"#;

    listing_page(items, has_next).replacen("<body>", &format!("<body>{}", controls), 1)
}
