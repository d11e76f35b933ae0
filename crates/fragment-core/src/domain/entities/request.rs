use serde::Serialize;

/// Raw user input for one component generation.
///
/// Built once per invocation via [`GenerationRequest::builder`] and never
/// mutated afterwards. `style` is kept as the string the user typed so the
/// normalizer can report it verbatim when it is not a valid choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationRequest {
    pub name: String,
    pub project: String,
    pub style: String,
    pub directory: Option<String>,
    pub flat: bool,
    pub skip_tests: bool,
    pub export: bool,
    pub pascal_case_files: bool,
    pub js: bool,
    pub routing: bool,
    pub skip_format: bool,
}

impl GenerationRequest {
    pub fn builder(name: impl Into<String>, project: impl Into<String>) -> GenerationRequestBuilder {
        GenerationRequestBuilder {
            request: Self {
                name: name.into(),
                project: project.into(),
                style: "css".into(),
                directory: None,
                flat: false,
                skip_tests: false,
                export: false,
                pascal_case_files: false,
                js: false,
                routing: false,
                skip_format: false,
            },
        }
    }
}

/// Fluent builder for [`GenerationRequest`]. Defaults match the CLI's.
#[derive(Debug, Clone)]
pub struct GenerationRequestBuilder {
    request: GenerationRequest,
}

impl GenerationRequestBuilder {
    pub fn style(mut self, style: impl Into<String>) -> Self {
        self.request.style = style.into();
        self
    }

    pub fn directory(mut self, directory: Option<impl Into<String>>) -> Self {
        self.request.directory = directory.map(Into::into);
        self
    }

    pub fn flat(mut self, flat: bool) -> Self {
        self.request.flat = flat;
        self
    }

    pub fn skip_tests(mut self, skip: bool) -> Self {
        self.request.skip_tests = skip;
        self
    }

    pub fn export(mut self, export: bool) -> Self {
        self.request.export = export;
        self
    }

    pub fn pascal_case_files(mut self, pascal: bool) -> Self {
        self.request.pascal_case_files = pascal;
        self
    }

    pub fn js(mut self, js: bool) -> Self {
        self.request.js = js;
        self
    }

    pub fn routing(mut self, routing: bool) -> Self {
        self.request.routing = routing;
        self
    }

    pub fn skip_format(mut self, skip: bool) -> Self {
        self.request.skip_format = skip;
        self
    }

    pub fn build(self) -> GenerationRequest {
        self.request
    }
}
