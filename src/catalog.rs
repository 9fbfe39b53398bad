//! Immutable keyword/catalog tables injected into the classifiers.
//! Classifiers are pure functions of (text, catalog); nothing in here mutates.

/// Synthetic tally bucket used when host platform keywords match but no
/// explicit game name does.
pub const HOST_PSEUDO_GAME: &str = "[主机平台内容]";
/// Mobile counterpart of [`HOST_PSEUDO_GAME`].
pub const MOBILE_PSEUDO_GAME: &str = "[手游平台内容]";

/// Reference data for relevance filtering, game/platform classification,
/// sentiment scoring and keyword discovery.
#[derive(Clone, Debug)]
pub struct Catalog {
    /// Broad game-related terms; substring match against the record text blob.
    pub relevance_keywords: Vec<&'static str>,
    /// Known game-related board names; substring match against the board name.
    pub gaming_boards: Vec<&'static str>,

    /// Explicit game names counted under the host tally.
    pub host_games: Vec<&'static str>,
    /// Explicit game names counted under the mobile tally.
    pub mobile_games: Vec<&'static str>,

    /// Platform tokens (lowercase) marking host/console content.
    pub host_platform_keywords: Vec<&'static str>,
    /// Platform tokens (lowercase) marking mobile content.
    pub mobile_platform_keywords: Vec<&'static str>,

    /// Five-level sentiment lexicons. Checked in precedence order:
    /// very-negative, very-positive, negative, positive.
    pub very_positive_keywords: Vec<&'static str>,
    pub positive_keywords: Vec<&'static str>,
    pub negative_keywords: Vec<&'static str>,
    pub very_negative_keywords: Vec<&'static str>,

    /// Simple three-way lexicons used for the approval-rate stats.
    pub simple_positive_keywords: Vec<&'static str>,
    pub simple_negative_keywords: Vec<&'static str>,

    /// Tokens dropped during keyword discovery.
    pub stopwords: Vec<&'static str>,

    /// Post-length buckets: (inclusive lower, exclusive upper, label).
    pub length_bins: Vec<(usize, Option<usize>, &'static str)>,

    /// Monday-first weekday labels.
    pub weekday_labels: [&'static str; 7],
}

impl Catalog {
    /// The built-in reference tables.
    pub fn builtin() -> Self {
        Self {
            relevance_keywords: vec![
                "游戏", "网游", "手游", "端游", "电竞", "steam", "ps5", "xbox", "switch",
                "主机", "掌机", "pc", "单机", "在线", "多人", "竞技", "副本", "剧情",
                "装备", "角色", "升级", "任务", "成就", "皮肤", "道具", "攻略", "测评",
                "mod", "补丁", "DLC", "画质", "帧率", "卡顿", "流畅", "操作", "手感",
                "存档", "加载", "闪退", "bug", "更新", "版本", "发售", "预售", "折扣",
                "推荐", "对比", "选择", "配置", "需求", "安装", "下载", "账号", "登录",
            ],
            gaming_boards: vec![
                "游戏", "主机游戏", "steam", "ps5", "xbox", "switch", "手游", "电竞",
                "网络游戏", "单机游戏", "图拉丁", "电脑吧", "显卡", "游戏推荐",
                "游戏王", "原神", "塞尔达", "战神", "地平线", "宝可梦", "马里奥",
                "最终幻想", "王者荣耀", "和平精英", "pubg", "csgo", "dota", "lol",
                "守望先锋", "apex", "valorant", "gta", "赛博朋克", "巫师", "刺客信条",
                "荒野大镖客",
            ],
            host_games: vec![
                "塞尔达", "赛博朋克2077", "巫师3", "刺客信条", "荒野大镖客2", "gta5",
                "原神", "最终幻想", "战神", "地平线", "漫威蜘蛛侠", "塞尔达传说",
                "马里奥", "宝可梦", "暗黑破坏神", "星际争霸", "红警",
            ],
            mobile_games: vec![
                "王者荣耀", "和平精英", "lol", "csgo", "pubg", "原神", "三国杀",
                "饥荒", "我的世界", "泰拉瑞亚", "among us", "糖豆人", "apex",
                "valorant", "吃鸡",
            ],
            host_platform_keywords: vec![
                "ps5", "xbox", "switch", "主机", "playstation", "ps4", "ps3",
                "xbox series", "xbox one",
            ],
            mobile_platform_keywords: vec![
                "手机", "手游", "移动端", "安卓", "ios", "app", "手游推荐", "手机游戏",
            ],
            very_positive_keywords: vec![
                "神作", "惊艳", "完美", "极致", "必玩", "经典", "史诗", "震撼",
                "爽到", "无敌",
            ],
            positive_keywords: vec![
                "好玩", "不错", "喜欢", "推荐", "优秀", "给力", "良心", "精彩",
                "流畅", "满意",
            ],
            negative_keywords: vec![
                "失望", "差评", "垃圾", "坑", "骗钱", "卡顿", "闪退", "无聊",
                "后悔", "卸载",
            ],
            very_negative_keywords: vec![
                "垃圾中的垃圾", "完全失望", "骗钱游戏", "根本没法玩", "史上最差",
                "烂作",
            ],
            simple_positive_keywords: vec![
                "好玩", "不错", "喜欢", "推荐", "好评", "优秀", "神作", "给力",
                "良心", "精彩",
            ],
            simple_negative_keywords: vec![
                "垃圾", "不好玩", "失望", "差评", "坑", "骗钱", "卸载", "后悔",
                "无聊",
            ],
            stopwords: vec![
                "的", "了", "是", "在", "我", "有", "和", "就", "不", "人", "都",
                "一", "一个", "上", "也", "很", "到", "说", "要", "去", "你", "会",
                "着", "没有", "看", "好", "自己", "这", "们", "来", "给", "之",
                "得", "以",
            ],
            length_bins: vec![
                (0, Some(50), "0-50字"),
                (50, Some(100), "51-100字"),
                (100, Some(200), "101-200字"),
                (200, Some(300), "201-300字"),
                (300, Some(500), "301-500字"),
                (500, None, "500字以上"),
            ],
            weekday_labels: ["周一", "周二", "周三", "周四", "周五", "周六", "周日"],
        }
    }

    /// Union of the host and mobile catalogs, host order first, each name once.
    pub fn all_games(&self) -> Vec<&'static str> {
        let mut all = self.host_games.clone();
        for g in &self.mobile_games {
            if !all.contains(g) {
                all.push(g);
            }
        }
        all
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
