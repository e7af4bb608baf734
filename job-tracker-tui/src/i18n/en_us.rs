//! 英文翻译 (en-US)

use super::keys::{
    ApplicationsTexts, CommonTexts, ConfirmDeleteTexts, FormTexts, HelpActionTexts, HelpTexts,
    HintTexts, NavTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "Job Tracker",
        cancel: "Cancel",
        delete: "Delete",
        close: "Close",
        loading: "Loading...",
        error: "Error",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        switch_panel: "Switch panel",
        select: "Select",
        search: "Search",
        add: "Add",
        edit: "Edit",
        delete: "Delete",
        reload: "Reload",
        help: "Help",
        quit: "Quit",
        done: "Done",
        clear: "Clear",
        next_field: "Next field",
        adjust: "Adjust",
        add_link: "Add link",
        remove_link: "Remove link",
        submit: "Submit",
        cancel: "Cancel",
    },

    // ========================================================================
    // 分类侧边栏
    // ========================================================================
    nav: NavTexts {
        title: "Categories",
        all: "All Applications",
        offers: "Offers",
        interview: "Interview",
        applied: "Applied",
        rejected: "Rejected",
        graveyard: "Graveyard",
    },

    // ========================================================================
    // 列表页
    // ========================================================================
    applications: ApplicationsTexts {
        search_placeholder: "Search by title, company or location",
        loading: "Loading applications...",
        empty: "No applications yet",
        empty_hint: "Press Alt+a to add your first application",
        no_match: "No applications match your search",
        load_failed: "Failed to load job applications.",
        count_suffix: "applications",
        expires_in: "Expires in",
        days: "days",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    form: FormTexts {
        create_title: "New Application",
        edit_title: "Edit Application",
        title: "Job Title *",
        company: "Company *",
        location: "Location",
        salary: "Salary Range",
        salary_low: "Min",
        salary_high: "Max",
        status: "Status",
        priority: "Priority",
        expiration: "Expires in (days)",
        links: "Links",
        title_placeholder: "e.g. Software Engineer",
        company_placeholder: "e.g. Acme Corp",
        location_placeholder: "e.g. Remote",
        link_placeholder: "https://",
        create: "Create",
        save: "Save",
        creating: "Creating...",
        saving: "Saving...",
        missing_required: "Please fill in all fields",
        create_failed: "Failed to create job application. Please try again.",
        update_failed: "Failed to update job application. Please try again.",
    },

    confirm_delete: ConfirmDeleteTexts {
        title: "Delete Application",
        message: "Are you sure you want to delete this application?",
        deleting: "Deleting...",
        delete_failed: "Failed to delete job application. Please try again.",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        reloading: "Reloading...",
        loaded: "Applications loaded",
        created: "Application created",
        updated: "Application updated",
        deleted: "Application deleted",
        nothing_selected: "No application selected",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global: "Global shortcuts",
        list: "Applications",
        form: "Application form",
        close_hint: "Press Esc to close the help",
        actions: HelpActionTexts {
            switch_panel: "Switch panel",
            focus_search: "Search",
            reload: "Reload",
            help: "Help",
            quit: "Quit",
            move_selection: "Move Up/Down",
            add: "New application",
            edit: "Edit",
            delete: "Delete",
            next_field: "Next/previous field",
            adjust: "Status, priority or salary",
            add_link: "Add link",
            remove_link: "Remove focused link",
            submit: "Submit",
            cancel: "Close",
        },
    },
};
