//! 简体中文翻译 (zh-CN)

use super::keys::{
    ApplicationsTexts, CommonTexts, ConfirmDeleteTexts, FormTexts, HelpActionTexts, HelpTexts,
    HintTexts, NavTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // 通用文本
    // ========================================================================
    common: CommonTexts {
        app_name: "求职记录",
        cancel: "取消",
        delete: "删除",
        close: "关闭",
        loading: "加载中...",
        error: "错误",
    },

    // ========================================================================
    // 键盘提示
    // ========================================================================
    hints: HintTexts {
        switch_panel: "切换面板",
        select: "选择",
        search: "搜索",
        add: "新建",
        edit: "编辑",
        delete: "删除",
        reload: "刷新",
        help: "帮助",
        quit: "退出",
        done: "完成",
        clear: "清空",
        next_field: "下一项",
        adjust: "调整",
        add_link: "添加链接",
        remove_link: "移除链接",
        submit: "提交",
        cancel: "取消",
    },

    // ========================================================================
    // 分类侧边栏
    // ========================================================================
    nav: NavTexts {
        title: "分类",
        all: "全部申请",
        offers: "Offer",
        interview: "面试中",
        applied: "已投递",
        rejected: "已拒绝",
        graveyard: "已归档",
    },

    // ========================================================================
    // 列表页
    // ========================================================================
    applications: ApplicationsTexts {
        search_placeholder: "按职位、公司或地点搜索",
        loading: "正在加载...",
        empty: "还没有求职记录",
        empty_hint: "按 Alt+a 添加第一条记录",
        no_match: "没有匹配的记录",
        load_failed: "加载求职记录失败。",
        count_suffix: "条记录",
        expires_in: "剩余",
        days: "天",
    },

    // ========================================================================
    // 弹窗
    // ========================================================================
    form: FormTexts {
        create_title: "新建求职记录",
        edit_title: "编辑求职记录",
        title: "职位 *",
        company: "公司 *",
        location: "地点",
        salary: "薪资范围",
        salary_low: "最低",
        salary_high: "最高",
        status: "状态",
        priority: "优先级",
        expiration: "过期天数",
        links: "链接",
        title_placeholder: "例如：软件工程师",
        company_placeholder: "例如：某某科技",
        location_placeholder: "例如：远程",
        link_placeholder: "https://",
        create: "创建",
        save: "保存",
        creating: "创建中...",
        saving: "保存中...",
        missing_required: "请填写所有必填项",
        create_failed: "创建求职记录失败，请重试。",
        update_failed: "更新求职记录失败，请重试。",
    },

    confirm_delete: ConfirmDeleteTexts {
        title: "删除求职记录",
        message: "确定要删除这条记录吗？",
        deleting: "删除中...",
        delete_failed: "删除求职记录失败，请重试。",
    },

    // ========================================================================
    // 状态栏
    // ========================================================================
    status_bar: StatusBarTexts {
        reloading: "正在刷新...",
        loaded: "记录已加载",
        created: "记录已创建",
        updated: "记录已更新",
        deleted: "记录已删除",
        nothing_selected: "未选中任何记录",
    },

    // ========================================================================
    // 帮助
    // ========================================================================
    help: HelpTexts {
        title: "帮助",
        global: "全局快捷键",
        list: "列表",
        form: "表单",
        close_hint: "按 Esc 关闭帮助",
        actions: HelpActionTexts {
            switch_panel: "切换面板",
            focus_search: "搜索",
            reload: "刷新",
            help: "帮助",
            quit: "退出",
            move_selection: "上下移动",
            add: "新建记录",
            edit: "编辑",
            delete: "删除",
            next_field: "下一项/上一项",
            adjust: "状态、优先级或薪资",
            add_link: "添加链接",
            remove_link: "移除当前链接",
            submit: "提交",
            cancel: "关闭",
        },
    },
};
