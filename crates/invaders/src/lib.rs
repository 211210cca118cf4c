use anyhow::Result;
use invaders_game::{GameConfig, InvadersApp};
use invaders_sdl2::App;
use invaders_sdl2::{SdlContext, SdlInitInfo};

/// Runs the game in an SDL2 window until the player quits.
pub fn run(config: GameConfig) -> Result<()> {
    let app = InvadersApp::new(config);
    let init_info = SdlInitInfo::builder()
        .width(app.width())
        .height(app.height())
        .scale(app.scale())
        .title(app.title())
        .build();
    SdlContext::run(init_info, app)?;
    Ok(())
}

/// Parses the optional lives argument.
pub fn parse_lives(arg: Option<&str>) -> Result<GameConfig, String> {
    match arg {
        None => Ok(GameConfig::default()),
        Some(value) => value
            .parse::<u8>()
            .map(GameConfig::with_lives)
            .map_err(|_| format!("Invalid lives '{value}'; expected a number from 3 to 6.")),
    }
}
