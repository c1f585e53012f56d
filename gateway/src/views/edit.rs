use super::{escape, layout};
use crate::services::backend::Post;

/// Form page shared by "New Post" (`post == None`) and "Edit Post".
pub fn edit_page(post: Option<&Post>, heading: &str, submit: &str) -> String {
    let action = match post {
        Some(p) => format!("/edit/{}", escape(&p.id.to_string())),
        None => "/new".to_string(),
    };
    let (title, content, author) = match post {
        Some(p) => (escape(&p.title), escape(&p.content), escape(&p.author)),
        None => (String::new(), String::new(), String::new()),
    };

    let body = format!(
        r#"    <h1>{heading}</h1>
    <form id="newPostForm" method="post" action="{action}">
      <input type="text" name="title" placeholder="Title" value="{title}" required>
      <textarea name="content" placeholder="Content" required rows="10">{content}</textarea>
      <input type="text" name="author" placeholder="Author" value="{author}">
      <button class="full-width" type="submit">{submit}</button>
    </form>
"#,
        heading = escape(heading),
        submit = escape(submit),
    );

    layout(heading, &body)
}
