#[cfg(windows)]
extern crate winres;

#[cfg(windows)]
fn main() {
  let version = env!("CARGO_PKG_VERSION");
  let mut res = winres::WindowsResource::new();
  res.set("FileDescription", "Resolves the Windows taskbar position for anchoring tray popups");
  res.set("ProductName", "Tray Anchor");
  res.set("InternalName", "TrayAnchor");
  res.set("OriginalFilename", "tray-anchor.exe");
  res.set_manifest(&format!(
    r#"
<assembly xmlns="urn:schemas-microsoft-com:asm.v1" manifestVersion="1.0">
  <assemblyIdentity
      version="{version}.0"
      processorArchitecture="*"
      name="trayanchor.TrayAnchor"
      type="win32" />
  <description>Resolves the Windows taskbar position for anchoring tray popups</description>
  <compatibility xmlns="urn:schemas-microsoft-com:compatibility.v1">
    <application>
      <supportedOS Id="{{8e0f7a12-bfb3-4fe8-b9a5-48fd50a15a9a}}"/>
    </application>
  </compatibility>
  <trustInfo xmlns="urn:schemas-microsoft-com:asm.v3">
    <security>
      <requestedPrivileges>
        <requestedExecutionLevel level="asInvoker" uiAccess="false" />
      </requestedPrivileges>
    </security>
  </trustInfo>
</assembly>
"#,
  ));
  res.compile().unwrap();
}

#[cfg(not(windows))]
fn main() {}
