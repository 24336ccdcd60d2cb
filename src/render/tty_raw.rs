//! Raw mode so a single key press dismisses a chart.
//!
//! The previous tty settings are restored when the guard drops.

use std::io::{self, Read};

#[cfg(target_os = "linux")]
mod sys {
    use std::os::raw::{c_int, c_uint};

    // mini-termios: only bits we need
    #[repr(C)]
    #[derive(Clone, Copy)]
    #[allow(non_camel_case_types)]
    pub struct termios {
        pub c_iflag: c_uint,
        pub c_oflag: c_uint,
        pub c_cflag: c_uint,
        pub c_lflag: c_uint,
        pub c_line: u8,
        pub c_cc: [u8; 32],
        pub c_ispeed: c_uint,
        pub c_ospeed: c_uint,
    }

    unsafe extern "C" {
        pub fn tcgetattr(fd: c_int, termios_p: *mut termios) -> c_int;
        pub fn tcsetattr(fd: c_int, actions: c_int, termios_p: *const termios) -> c_int;
    }

    pub const TCSANOW: c_int = 0;
    pub const ICANON: c_uint = 0o0000002;
    pub const ECHO: c_uint = 0o0000010;
    pub const VTIME: usize = 5;
    pub const VMIN: usize = 6;
}

/// Non-canonical, no-echo stdin for as long as it lives.
#[cfg(target_os = "linux")]
pub struct RawMode {
    fd: std::os::raw::c_int,
    saved: sys::termios,
}

#[cfg(target_os = "linux")]
impl RawMode {
    pub fn enter() -> io::Result<Self> {
        use std::os::unix::io::AsRawFd;

        let fd = io::stdin().as_raw_fd();
        // SAFETY: termios is plain old data; tcgetattr fills it.
        let mut t: sys::termios = unsafe { std::mem::zeroed() };
        if unsafe { sys::tcgetattr(fd, &mut t) } != 0 {
            return Err(io::Error::last_os_error());
        }
        let saved = t;
        t.c_lflag &= !(sys::ICANON | sys::ECHO);
        t.c_cc[sys::VMIN] = 1;
        t.c_cc[sys::VTIME] = 0;
        if unsafe { sys::tcsetattr(fd, sys::TCSANOW, &t) } != 0 {
            return Err(io::Error::last_os_error());
        }
        Ok(Self { fd, saved })
    }
}

#[cfg(target_os = "linux")]
impl Drop for RawMode {
    fn drop(&mut self) {
        // SAFETY: restores the settings read in `enter` on the same fd.
        unsafe {
            sys::tcsetattr(self.fd, sys::TCSANOW, &self.saved);
        }
    }
}

/// Elsewhere the terminal stays line-buffered and Enter dismisses.
#[cfg(not(target_os = "linux"))]
pub struct RawMode;

#[cfg(not(target_os = "linux"))]
impl RawMode {
    pub fn enter() -> io::Result<Self> {
        Ok(Self)
    }
}

/// Block until one byte arrives on stdin (or stdin closes).
pub fn wait_for_key() -> io::Result<()> {
    let _raw = RawMode::enter()?;
    let mut byte = [0u8; 1];
    let mut stdin = io::stdin().lock();
    loop {
        match stdin.read(&mut byte) {
            Ok(_) => return Ok(()),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}
