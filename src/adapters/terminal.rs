use crate::core::{AddressResult, UiPort};
use std::io::{Stderr, Stdout, Write};
use std::sync::Mutex;

/// 以終端機取代表單：輸入緩衝區、三行顯示欄位、錯誤串流上的提示
pub struct TerminalUi<O: Write + Send, N: Write + Send> {
    input: Mutex<String>,
    fields: Mutex<AddressResult>,
    out: Mutex<O>,
    notice_out: Mutex<N>,
}

impl TerminalUi<Stdout, Stderr> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdout(), std::io::stderr())
    }
}

impl<O: Write + Send, N: Write + Send> TerminalUi<O, N> {
    pub fn new(out: O, notice_out: N) -> Self {
        Self {
            input: Mutex::new(String::new()),
            fields: Mutex::new(AddressResult::default()),
            out: Mutex::new(out),
            notice_out: Mutex::new(notice_out),
        }
    }

    /// 相當於使用者在輸入欄位中打字
    pub fn set_input(&self, value: &str) {
        if let Ok(mut input) = self.input.lock() {
            *input = value.to_string();
        }
    }

    /// 目前顯示欄位的內容
    pub fn fields(&self) -> AddressResult {
        self.fields
            .lock()
            .map(|fields| fields.clone())
            .unwrap_or_default()
    }
}

pub fn render_fields(address: &AddressResult) -> String {
    format!(
        "prefecture: {}\ncity:       {}\naddress:    {}\n",
        address.region, address.locality, address.remainder
    )
}

impl<O: Write + Send, N: Write + Send> UiPort for TerminalUi<O, N> {
    fn read_input(&self) -> String {
        self.input
            .lock()
            .map(|input| input.clone())
            .unwrap_or_default()
    }

    fn show_fields(&self, address: &AddressResult) {
        if let Ok(mut fields) = self.fields.lock() {
            *fields = address.clone();
        }

        if let Ok(mut out) = self.out.lock() {
            if let Err(e) = out
                .write_all(render_fields(address).as_bytes())
                .and_then(|_| out.flush())
            {
                tracing::warn!("Failed to write address fields: {}", e);
            }
        }
    }

    fn show_notice(&self, message: &str) {
        if let Ok(mut out) = self.notice_out.lock() {
            if let Err(e) = writeln!(out, "⚠️  {}", message).and_then(|_| out.flush()) {
                tracing::warn!("Failed to write notice: {}", e);
            }
        }
    }
}
