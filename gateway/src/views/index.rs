use std::fmt::Write;

use super::{escape, layout};
use crate::services::backend::Post;

pub fn index_page(posts: &[Post]) -> String {
    let mut body = String::from(
        "    <h1>My Blog</h1>\n    <a class=\"button\" href=\"/new\">New Post</a>\n    <ul id=\"postsList\">\n",
    );

    for post in posts {
        // Writing into a String cannot fail.
        let _ = write!(
            body,
            r#"      <li>
        <h2>{title}</h2>
        <small>{date}</small>
        <p>{content}</p>
        <small>By: {author}</small>
        <a class="edit" href="/edit/{id}">Edit</a>
        <a class="delete" href="/delete/{id}">Delete</a>
      </li>
"#,
            title = escape(&post.title),
            date = post.date.format("%b %-d, %Y %H:%M UTC"),
            content = escape(&post.content),
            author = escape(&post.author),
            id = escape(&post.id.to_string()),
        );
    }

    body.push_str("    </ul>\n");
    layout("My Blog", &body)
}
