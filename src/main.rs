use yew_auto_scroll::components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
