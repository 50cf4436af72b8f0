use crate::api::ShellApi;
use crate::common::{AppBarPosition, Rect, WindowHandle};
use windows::Win32::Foundation::RECT;
use windows::Win32::UI::Shell::{ABM_GETTASKBARPOS, APPBARDATA, SHAppBarMessage};
use windows::Win32::UI::WindowsAndMessaging::{
  FindWindowW, SPI_GETWORKAREA, SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS, SystemParametersInfoW,
};
use windows::core::PCWSTR;

#[derive(Copy, Clone)]
pub struct RealShellApi;

impl RealShellApi {
  pub fn new() -> Self {
    Self
  }
}

impl ShellApi for RealShellApi {
  fn find_window_by_class(&self, class_name: &str) -> Option<WindowHandle> {
    let class_name_utf16: Vec<u16> = class_name.encode_utf16().chain(std::iter::once(0)).collect();
    match unsafe { FindWindowW(PCWSTR(class_name_utf16.as_ptr()), None) } {
      Ok(hwnd) if !hwnd.0.is_null() => Some(WindowHandle::from(hwnd)),
      _ => None,
    }
  }

  fn query_app_bar_position(&self, handle: WindowHandle) -> Option<AppBarPosition> {
    let mut data = APPBARDATA {
      cbSize: size_of::<APPBARDATA>() as u32,
      hWnd: handle.as_hwnd(),
      ..Default::default()
    };

    // ABM_GETTASKBARPOS answers with TRUE (1) on success
    let result = unsafe { SHAppBarMessage(ABM_GETTASKBARPOS, &mut data) };
    if result != 1 {
      return None;
    }

    Some(AppBarPosition::from(data))
  }

  fn get_work_area(&self) -> Rect {
    let mut rect = RECT::default();
    let result = unsafe {
      SystemParametersInfoW(
        SPI_GETWORKAREA,
        0,
        Some(&mut rect as *mut RECT as *mut _),
        SYSTEM_PARAMETERS_INFO_UPDATE_FLAGS(0),
      )
    };
    if result.is_err() {
      return Rect::default();
    }

    Rect::from(rect)
  }
}
