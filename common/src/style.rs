//! NProgress用スタイルシート生成

use crate::config::ProgressConfig;

/// バー・ピン・スピナーのスタイルルールを生成
pub fn stylesheet(color: &str, height: u32) -> String {
    format!(
        r#"
#nprogress {{
  pointer-events: none;
}}
#nprogress .bar {{
  background: {color};
  position: fixed;
  z-index: 9999;
  top: 0;
  left: 0;
  width: 100%;
  height: {height}px;
}}
#nprogress .peg {{
  display: block;
  position: absolute;
  right: 0px;
  width: 100px;
  height: 100%;
  box-shadow: 0 0 10px {color}, 0 0 5px {color};
  opacity: 1;
  -webkit-transform: rotate(3deg) translate(0px, -4px);
  -ms-transform: rotate(3deg) translate(0px, -4px);
  transform: rotate(3deg) translate(0px, -4px);
}}
#nprogress .spinner {{
  display: block;
  position: fixed;
  z-index: 1031;
  top: 15px;
  right: 15px;
}}
#nprogress .spinner-icon {{
  width: 18px;
  height: 18px;
  box-sizing: border-box;
  border: solid 2px transparent;
  border-top-color: {color};
  border-left-color: {color};
  border-radius: 50%;
  -webkit-animation: nprogress-spinner 400ms linear infinite;
  animation: nprogress-spinner 400ms linear infinite;
}}
.nprogress-custom-parent {{
  overflow: hidden;
  position: relative;
}}
.nprogress-custom-parent #nprogress .spinner,
.nprogress-custom-parent #nprogress .bar {{
  position: absolute;
}}
@-webkit-keyframes nprogress-spinner {{
  0% {{
    -webkit-transform: rotate(0deg);
  }}
  100% {{
    -webkit-transform: rotate(360deg);
  }}
}}
@keyframes nprogress-spinner {{
  0% {{
    transform: rotate(0deg);
  }}
  100% {{
    transform: rotate(360deg);
  }}
}}
"#
    )
}

/// サーバー側HTML向けの `<style>` 要素を生成
pub fn style_tag(config: &ProgressConfig) -> String {
    let css = stylesheet(&config.color, config.height);
    match config.nonce.as_deref() {
        Some(nonce) if !nonce.is_empty() => {
            format!("<style nonce=\"{}\">{}</style>", escape_attribute(nonce), css)
        }
        _ => format!("<style>{}</style>", css),
    }
}

fn escape_attribute(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
