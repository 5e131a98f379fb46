use axum::response::Html;

pub async fn home() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

pub async fn certificados() -> Html<&'static str> {
    Html(include_str!("../../static/certificados.html"))
}
