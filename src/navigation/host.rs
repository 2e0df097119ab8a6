use crate::component::{ComponentContext, Lifecycle, MainHandle};
use crate::di::AppDependencies;
use crate::navigation::app::{AppComponent, AppOptions};

/// Platform bootstrap: owns the application lifecycle and the root component.
pub struct AppHost {
    deps: AppDependencies,
    main: MainHandle,
    options: AppOptions,
    lifecycle: Lifecycle,
    root: AppComponent,
}

impl AppHost {
    pub fn new(
        deps: AppDependencies,
        main: MainHandle,
        options: AppOptions,
        initial_conference_id: Option<String>,
    ) -> Self {
        let (lifecycle, root) = build_root(&deps, &main, &options, initial_conference_id);
        Self {
            deps,
            main,
            options,
            lifecycle,
            root,
        }
    }

    pub fn root(&self) -> &AppComponent {
        &self.root
    }

    pub fn lifecycle(&self) -> &Lifecycle {
        &self.lifecycle
    }

    /// Discard the whole tree and start again on `conference_id`.
    pub fn on_conference_deep_link(&mut self, conference_id: &str) {
        tracing::info!(conference = conference_id, "deep link");
        self.lifecycle.destroy();
        let (lifecycle, root) = build_root(
            &self.deps,
            &self.main,
            &self.options,
            Some(conference_id.to_string()),
        );
        self.lifecycle = lifecycle;
        self.root = root;
    }

    pub fn destroy(&self) {
        self.lifecycle.destroy();
    }
}

fn build_root(
    deps: &AppDependencies,
    main: &MainHandle,
    options: &AppOptions,
    initial_conference_id: Option<String>,
) -> (Lifecycle, AppComponent) {
    let lifecycle = Lifecycle::new("application");
    let ctx = ComponentContext::new(lifecycle.clone(), main.clone());
    let root = AppComponent::new(&ctx, deps.clone(), options.clone(), initial_conference_id);
    (lifecycle, root)
}
