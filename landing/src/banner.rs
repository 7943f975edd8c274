//! Console banner printed on boot, for the curious.

use js_sys::{Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use crate::sections::{GITHUB_URL, PROGRAM_ID, VERSION};

fn wordmark() -> String {
    format!(
        r#"
   _____            __  _            __   __ __
  / ___/___  ____  / /_(_)___  ___  / /  / //_/___ __________ ___  ____ _
  \__ \/ _ \/ __ \/ __/ / __ \/ _ \/ /  / ,<  / __ `/ ___/ __ `__ \/ __ `/
 ___/ /  __/ / / / /_/ / / / /  __/ /  / /| |/ /_/ / /  / / / / / / /_/ /
/____/\___/_/ /_/\__/_/_/ /_/\___/_/  /_/ |_|\__,_/_/  /_/ /_/ /_/\__,_/

  Decentralized threat intelligence for Web3 infrastructure.
  {VERSION} | sentinelkarma.io
"#
    )
}

pub fn print_console_banner() {
    let log = |text: &str, style: &str| {
        web_sys::console::log_2(
            &JsValue::from_str(&format!("%c{text}")),
            &JsValue::from_str(style),
        );
    };

    log(
        &wordmark(),
        "color: #00ff88; font-family: monospace; font-size: 11px;",
    );
    log(
        &format!("(o_o) [code] {GITHUB_URL}"),
        "color: #00ccff;",
    );
    log("(^_^) [docs] /whitepaper.md", "color: #ffcc00;");
    log(
        &format!("(._.) [chain] program {PROGRAM_ID}"),
        "color: #888; font-size: 10px;",
    );
    log(
        "(._.) psst... try: sentinelkarma.programId()",
        "color: #333; font-size: 9px;",
    );

    install_console_namespace();
}

/// Attach a `sentinelkarma` helper object to `window` so the program ID can
/// be grabbed from the console.
fn install_console_namespace() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let namespace = Object::new();

    let program_id_fn = Closure::wrap(Box::new(|| {
        web_sys::console::log_2(
            &JsValue::from_str(&format!("%c{PROGRAM_ID}")),
            &JsValue::from_str("color: #00ff88; font-family: monospace;"),
        );
    }) as Box<dyn Fn()>);

    let _ = Reflect::set(
        &namespace,
        &JsValue::from_str("programId"),
        program_id_fn.as_ref(),
    );
    program_id_fn.forget();

    let _ = Reflect::set(&window, &JsValue::from_str("sentinelkarma"), &namespace);
}
