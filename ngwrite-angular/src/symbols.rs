//! Where well-known Angular symbols are imported from.

pub(crate) const ANGULAR_CORE: &str = "@angular/core";
pub(crate) const ANGULAR_ROUTER: &str = "@angular/router";

/// Symbols resolved without a `[symbols]` entry.
const WELL_KNOWN: &[(&str, &str)] = &[
    ("CUSTOM_ELEMENTS_SCHEMA", ANGULAR_CORE),
    ("NO_ERRORS_SCHEMA", ANGULAR_CORE),
    ("APP_INITIALIZER", ANGULAR_CORE),
    ("ErrorHandler", ANGULAR_CORE),
    ("provideZoneChangeDetection", ANGULAR_CORE),
    ("CommonModule", "@angular/common"),
    ("AsyncPipe", "@angular/common"),
    ("NgClass", "@angular/common"),
    ("NgFor", "@angular/common"),
    ("NgIf", "@angular/common"),
    ("BrowserModule", "@angular/platform-browser"),
    ("provideClientHydration", "@angular/platform-browser"),
    ("BrowserAnimationsModule", "@angular/platform-browser/animations"),
    ("provideAnimations", "@angular/platform-browser/animations"),
    ("FormsModule", "@angular/forms"),
    ("ReactiveFormsModule", "@angular/forms"),
    ("HttpClientModule", "@angular/common/http"),
    ("provideHttpClient", "@angular/common/http"),
    ("withFetch", "@angular/common/http"),
    ("withInterceptors", "@angular/common/http"),
    ("RouterModule", ANGULAR_ROUTER),
    ("RouterOutlet", ANGULAR_ROUTER),
    ("RouterLink", ANGULAR_ROUTER),
    ("provideRouter", ANGULAR_ROUTER),
    ("withComponentInputBinding", ANGULAR_ROUTER),
];

/// Module a well-known symbol is exported from.
pub(crate) fn well_known_module(symbol: &str) -> Option<&'static str> {
    WELL_KNOWN
        .iter()
        .find(|(name, _)| *name == symbol)
        .map(|(_, module)| *module)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_known_module() {
        assert_eq!(well_known_module("BrowserModule"), Some("@angular/platform-browser"));
        assert_eq!(well_known_module("provideRouter"), Some(ANGULAR_ROUTER));
        assert_eq!(well_known_module("HeroService"), None);
    }
}
