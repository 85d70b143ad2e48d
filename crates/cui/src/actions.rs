use crate::app::App;
use crate::input::InputAction;

pub fn dispatch(app: &mut App, action: InputAction) {
    match action {
        InputAction::None => {}
        InputAction::Quit => app.should_quit = true,
        InputAction::ToggleHelp => app.show_help = !app.show_help,
        InputAction::Dismiss => {
            if app.show_help {
                app.show_help = false;
            } else {
                app.should_quit = true;
            }
        }
        InputAction::Restart => app.restart(),
        InputAction::AvoidRoom => app.avoid_room(),
        InputAction::Play { slot, barehanded } => app.play_slot(slot, barehanded),
    }
}
