fn main() -> bevy::app::AppExit {
    space_catcher::run()
}
