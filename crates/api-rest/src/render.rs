//! Page rendering.
//!
//! Rendering is split in two pure steps: an operation result becomes a [`PageView`]
//! view-model, and a view-model becomes an HTML string. Nothing here touches the store.

use wishlist_core::Place;

pub const EMPTY_WISHLIST_MESSAGE: &str = "You have no places in your wishlist";
pub const EMPTY_VISITED_MESSAGE: &str = "You have not visited any places yet";

/// One listed place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceRow {
    pub id: i64,
    pub name: String,
    /// Form target for the "Visited!" button; `None` on the visited page.
    pub visit_action: Option<String>,
}

/// Everything a list page needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    pub title: &'static str,
    pub rows: Vec<PlaceRow>,
    pub empty_message: Option<&'static str>,
    pub error: Option<String>,
    pub show_add_form: bool,
}

/// URL that marks the place with `id` visited.
pub fn visit_url(id: i64) -> String {
    format!("/place/{id}/was_visited")
}

/// View-model for the wishlist (unvisited places) page.
pub fn wishlist_view(places: &[Place], error: Option<String>) -> PageView {
    let rows = places
        .iter()
        .map(|place| PlaceRow {
            id: place.id.get(),
            name: place.name.as_str().to_owned(),
            visit_action: Some(visit_url(place.id.get())),
        })
        .collect::<Vec<_>>();

    PageView {
        title: "Travel Wishlist",
        empty_message: rows.is_empty().then_some(EMPTY_WISHLIST_MESSAGE),
        rows,
        error,
        show_add_form: true,
    }
}

/// View-model for the visited places page.
pub fn visited_view(places: &[Place]) -> PageView {
    let rows = places
        .iter()
        .map(|place| PlaceRow {
            id: place.id.get(),
            name: place.name.as_str().to_owned(),
            visit_action: None,
        })
        .collect::<Vec<_>>();

    PageView {
        title: "Places Visited",
        empty_message: rows.is_empty().then_some(EMPTY_VISITED_MESSAGE),
        rows,
        error: None,
        show_add_form: false,
    }
}

pub fn render_page(view: &PageView) -> String {
    let mut body = String::new();

    if let Some(error) = &view.error {
        body.push_str(&format!(
            "<p class=\"error\" role=\"alert\">{}</p>\n",
            escape_html(error)
        ));
    }

    if view.show_add_form {
        body.push_str(
            "<form method=\"post\" action=\"/\">\n\
             <label for=\"id_name\">Name:</label>\n\
             <input type=\"text\" name=\"name\" id=\"id_name\" maxlength=\"200\" required>\n\
             <label for=\"id_visited\">Visited:</label>\n\
             <input type=\"checkbox\" name=\"visited\" id=\"id_visited\" value=\"true\">\n\
             <button type=\"submit\">Add</button>\n\
             </form>\n",
        );
    }

    match view.empty_message {
        Some(message) => body.push_str(&format!("<p>{message}</p>\n")),
        None => {
            body.push_str("<ul class=\"places\">\n");
            for row in &view.rows {
                body.push_str(&format!(
                    "<li id=\"place-{}\">{}",
                    row.id,
                    escape_html(&row.name)
                ));
                if let Some(action) = &row.visit_action {
                    body.push_str(&format!(
                        " <form method=\"post\" action=\"{}\"><button type=\"submit\">Visited!</button></form>",
                        escape_html(action)
                    ));
                }
                body.push_str("</li>\n");
            }
            body.push_str("</ul>\n");
        }
    }

    layout(view.title, &body)
}

/// Page shown for unknown places and unknown routes.
pub fn render_not_found(message: &str) -> String {
    layout(
        "Not Found",
        &format!("<p class=\"error\">{}</p>\n", escape_html(message)),
    )
}

/// Page shown when storage fails; the cause stays in the logs.
pub fn render_server_error() -> String {
    layout(
        "Error",
        "<p class=\"error\">Something went wrong. Please try again.</p>\n",
    )
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body>\n\
         <nav><a href=\"/\">Wishlist</a> | <a href=\"/visited\">Places visited</a></nav>\n\
         <h1>{title}</h1>\n\
         {body}\
         </body>\n\
         </html>\n"
    )
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
    }
    out
}
