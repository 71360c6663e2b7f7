use leptos::prelude::*;
use leptos_router::components::A;

use crate::util::auth::FEED_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Страница не найдена"</p>
            <A href=FEED_PATH>"Вернуться к ленте"</A>
        </div>
    }
}
