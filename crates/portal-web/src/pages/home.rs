use leptos::prelude::*;

/// Landing page heading.
pub const HOME_TITLE: &str = "Welcome to the Citizen Services Portal";

/// Landing page introduction.
pub const HOME_DESCRIPTION: &str = "This portal provides access to various government services.";

/// Landing page. Static, takes no props.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="container mx-auto p-4">
            <h1 class="text-3xl font-bold mb-4">{HOME_TITLE}</h1>
            <p class="text-lg mb-4">{HOME_DESCRIPTION}</p>
            // Add links or sections for different services here
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render() -> String {
        view! { <HomePage/> }.to_html()
    }

    #[test]
    fn texts_are_present() {
        assert!(!HOME_TITLE.is_empty());
        assert!(!HOME_DESCRIPTION.is_empty());
    }

    #[test]
    fn renders_single_heading_with_title() {
        let html = render();

        assert_eq!(html.matches("<h1").count(), 1);
        assert_eq!(html.matches(HOME_TITLE).count(), 1);
        assert!(html.contains("text-3xl font-bold mb-4"));
    }

    #[test]
    fn renders_single_paragraph_with_description() {
        let html = render();

        assert_eq!(html.matches("<p").count(), 1);
        assert_eq!(html.matches(HOME_DESCRIPTION).count(), 1);
        assert!(html.contains("text-lg mb-4"));
    }

    #[test]
    fn heading_comes_before_paragraph() {
        let html = render();

        let title = html.find(HOME_TITLE).unwrap();
        let description = html.find(HOME_DESCRIPTION).unwrap();
        assert!(title < description);
    }

    #[test]
    fn wraps_content_in_container() {
        let html = render();

        let container = html.find("container mx-auto p-4").unwrap();
        assert!(container < html.find("<h1").unwrap());
    }

    #[test]
    fn rendering_is_deterministic() {
        assert_eq!(render(), render());
    }
}
