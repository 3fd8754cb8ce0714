/// Generic game renderer trait
///
/// Renderers are pure: they read a game's state and draw it, never mutate it.
pub trait GameRenderer<State> {
    fn render(frame: &mut ratatui::Frame, state: &State);
}
