//! A C API for interacting with `Name` objects.

use super::Name;
use libc::c_char;
use std::ffi::{CStr, CString};
use std::mem;
use std::ptr;

// Strings with an interior NUL have no C representation and come back null
fn str_to_char_star(s: &str) -> *const c_char {
    match CString::new(s) {
        Ok(s) => s.into_raw(),
        Err(_) => ptr::null(),
    }
}

/// # Safety
///
/// `input` must be a valid, NUL-terminated C string.
#[no_mangle]
pub unsafe extern "C" fn name_parser_parse(input: *const c_char) -> Option<Box<Name>> {
    let s = CStr::from_ptr(input).to_string_lossy();
    Name::parse(&s).ok().map(Box::new)
}

/// # Safety
///
/// `name_ptr` must come from `name_parser_parse` and not have been freed.
#[no_mangle]
pub unsafe extern "C" fn name_parser_free_name(name_ptr: *mut Name) {
    mem::drop(Box::from_raw(name_ptr));
}

/// # Safety
///
/// `str_ptr` must come from one of the string accessors and not have been freed.
#[no_mangle]
pub unsafe extern "C" fn name_parser_free_string(str_ptr: *mut c_char) {
    mem::drop(CString::from_raw(str_ptr));
}

#[no_mangle]
pub extern "C" fn name_parser_salutation(name: &Name) -> *const c_char {
    str_to_char_star(name.salutation())
}

#[no_mangle]
pub extern "C" fn name_parser_first_name(name: &Name) -> *const c_char {
    str_to_char_star(name.first_name())
}

#[no_mangle]
pub extern "C" fn name_parser_middle_name(name: &Name) -> *const c_char {
    str_to_char_star(name.middle_name())
}

#[no_mangle]
pub extern "C" fn name_parser_last_name(name: &Name) -> *const c_char {
    str_to_char_star(name.last_name())
}

#[no_mangle]
pub extern "C" fn name_parser_suffix(name: &Name) -> *const c_char {
    str_to_char_star(name.suffix())
}

#[no_mangle]
pub extern "C" fn name_parser_display_full(name: &Name) -> *const c_char {
    str_to_char_star(&name.display_full())
}

#[cfg(test)]
mod tests {
    use super::*;

    unsafe fn take(s: *const c_char) -> String {
        let result = CStr::from_ptr(s).to_string_lossy().into_owned();
        name_parser_free_string(s as *mut c_char);
        result
    }

    #[test]
    fn parse_and_read_back() {
        let input = CString::new("Mr Anthony R Von Fange III").unwrap();
        unsafe {
            let name = name_parser_parse(input.as_ptr()).unwrap();
            assert_eq!("Mr.", take(name_parser_salutation(&name)));
            assert_eq!("Anthony", take(name_parser_first_name(&name)));
            assert_eq!("R", take(name_parser_middle_name(&name)));
            assert_eq!("Von Fange", take(name_parser_last_name(&name)));
            assert_eq!("III", take(name_parser_suffix(&name)));
            assert_eq!("Mr. Anthony R Von Fange III", take(name_parser_display_full(&name)));
            name_parser_free_name(Box::into_raw(name));
        }
    }

    #[test]
    fn unparseable_is_null() {
        let input = CString::new("(nobody)").unwrap();
        unsafe {
            assert!(name_parser_parse(input.as_ptr()).is_none());
        }
    }
}
