use std::io;

use clap::Parser;
use ratatui::DefaultTerminal;
use tracing::{info, warn};

use tasklist_tui::app::App;
use tasklist_tui::cli::Cli;
use tasklist_tui::config::{default_config_path, default_log_path, load_config, Config};
use tasklist_tui::{event, logging, ui};

fn main() -> io::Result<()> {
    // 解析命令行参数
    let cli = Cli::parse();

    // 加载配置；出错时退回默认值，启动后再记录
    let config_path = cli.config.clone().or_else(default_config_path);
    let (config, config_error) = match config_path.as_deref() {
        Some(path) => match load_config(path) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        },
        None => (Config::default(), None),
    };

    let startup = cli.resolve(&config);
    init_logging(&config, &startup.log_level);
    if let Some(e) = config_error {
        warn!(error = %e, "failed to load config, using defaults");
    }
    if let Some(e) = &startup.theme_error {
        warn!(error = %e, "ignoring configured theme");
    }

    let theme = startup.theme;
    info!(theme = theme.label(), "starting");

    // 初始化终端（ratatui::init 会安装 panic hook 恢复终端）
    let mut terminal = ratatui::init();
    let mut app = App::new(theme);

    // 运行主循环
    let result = run(&mut terminal, &mut app);

    // 恢复终端
    ratatui::restore();

    info!(tasks = app.controller.len(), "exiting");
    result
}

/// 初始化文件日志；失败时仅提示，不影响运行
fn init_logging(config: &Config, level: &str) {
    if !config.log.enabled {
        return;
    }
    let Some(path) = config
        .log
        .file
        .clone()
        .or_else(default_log_path)
    else {
        return;
    };
    if let Err(e) = logging::init(&path, level) {
        eprintln!("Logging disabled: {}", e);
    }
}

fn run(terminal: &mut DefaultTerminal, app: &mut App) -> io::Result<()> {
    loop {
        // 渲染界面
        terminal.draw(|frame| ui::screen::render(frame, app))?;

        // 处理事件
        if !event::handle_events(app)? {
            break;
        }
    }

    Ok(())
}
