use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use notify::{ToastProvider, Toaster};
use theme::{ThemeProvider, ThemeToggleButton};
use ui_kit::{Aside, Heading, Main, TextRole};

use crate::pages::{ElementsPage, LayoutPage, NavigationPage, NotificationsPage, ThemePage};

#[component]
pub fn GalleryApp() -> impl IntoView {
    provide_meta_context();
    let services = platform_web::web_services();
    provide_context(services.clone());

    view! {
        <Title text="Component Gallery" />
        <Meta name="description" content="Visual catalogue of the shared UI kit." />

        <ThemeProvider services=services.clone()>
            <ToastProvider services=services>
                <Router>
                    <div class="gallery-root">
                        <Aside aria_label="Gallery navigation".to_string()>
                            <GalleryNav />
                        </Aside>
                        <Main>
                            <Routes>
                                <Route path="" view=ElementsPage />
                                <Route path="/layout" view=LayoutPage />
                                <Route path="/navigation" view=NavigationPage />
                                <Route path="/theme" view=ThemePage />
                                <Route path="/notifications" view=NotificationsPage />
                            </Routes>
                        </Main>
                    </div>
                    <Toaster />
                </Router>
            </ToastProvider>
        </ThemeProvider>
    }
}

#[component]
fn GalleryNav() -> impl IntoView {
    view! {
        <nav class="gallery-nav" aria-label="Sections">
            <Heading role=TextRole::Title>"Gallery"</Heading>
            <A href="/">"Elements"</A>
            <A href="/layout">"Layout"</A>
            <A href="/navigation">"Navigation"</A>
            <A href="/theme">"Theme"</A>
            <A href="/notifications">"Notifications"</A>
            <ThemeToggleButton />
        </nav>
    }
}
