// src/generation/backup.rs
// Fixed backup texts substituted when the provider call fails

use rand::seq::IndexedRandom;

use super::GenerationCategory;

pub const BACKUP_JOKES: [&str; 10] = [
    "为什么厨师总是很开心？因为他们每天都在\"炒\"作！",
    "面包和馒头吵架了，面包说：\"你别太\"馒\"了！",
    "为什么火锅总是那么热闹？因为它喜欢\"涮\"存在感！",
    "面条和饺子比赛跑步，面条赢了，因为饺子太\"胖\"了！",
    "为什么冰淇淋总是心情不好？因为它太容易\"融化\"了！",
    "汉堡和披萨谁更受欢迎？当然是汉堡，因为它有\"堡\"障！",
    "为什么奶茶总是那么甜？因为它有\"茶\"不完的甜蜜！",
    "炸鸡和烤鸡的区别是什么？一个会\"炸\"，一个会\"烤\"！",
    "为什么寿司总是那么冷静？因为它有\"鱼\"生哲学！",
    "蛋糕和面包谁更幸福？当然是蛋糕，因为它有\"蛋\"生的快乐！",
];

pub const BACKUP_FACTS: [&str; 15] = [
    "蜂蜜永远不会变质，考古学家在埃及金字塔中发现了3000年前的蜂蜜，仍然可以食用。",
    "香蕉实际上是浆果，而草莓却不是。",
    "苹果比咖啡更能提神，因为它含有更多的天然糖分和维生素。",
    "世界上最辣的辣椒是卡罗莱纳死神辣椒，它的辣度可以达到220万史高维尔单位。",
    "巧克力含有一种叫做苯乙胺的化学物质，这种物质能够让人产生恋爱的感觉。",
    "菠萝含有一种叫做菠萝蛋白酶的酶，这种酶可以分解蛋白质，所以吃菠萝时会有刺痛感。",
    "胡萝卜最初是紫色的，后来经过培育才变成了橙色。",
    "咖啡最初是被山羊发现的，牧羊人发现山羊吃了咖啡果后变得异常兴奋。",
    "番茄最初被认为是有毒的，因为它们是茄科植物。",
    "世界上有超过1000种不同的苹果品种。",
    "生姜可以帮助缓解恶心和呕吐，是一种天然的止吐药。",
    "大蒜具有抗菌和抗病毒的特性，被称为天然的抗生素。",
    "柠檬含有大量的维生素C，可以帮助增强免疫系统。",
    "牛油果含有健康的单不饱和脂肪，有助于降低胆固醇。",
    "蓝莓含有抗氧化剂，可以帮助保护大脑免受氧化应激的损害。",
];

pub const BACKUP_EASTER_EGGS: [&str; 10] = [
    "🎉 恭喜你发现了神秘的\"吃货宇宙\"！在这里，每一口美食都藏着一个平行世界！",
    "🌟 传说集齐7个美食彩蛋可以召唤\"饿了么神龙\"，它会满足你一个关于吃的愿望！",
    "🎭 你刚刚触发了\"美食时空裂缝\"，现在你可以品尝到来自未来的分子料理！",
    "🦄 恭喜你解锁了\"独角兽餐厅\"的隐藏菜单，这里的每道菜都会让你飘起来！",
    "🔮 神秘的美食占卜师告诉你：今天你会遇到命中注定的那道菜！",
    "🎪 欢迎来到\"美食马戏团\"，这里的表演者都是会跳舞的食物！",
    "🌈 你发现了\"彩虹厨房\"的秘密入口，里面的食物都是七彩斑斓的！",
    "🎨 恭喜你获得了\"美食艺术家\"称号，现在你可以用食物创作艺术品了！",
    "🎭 你刚刚进入了\"美食戏剧院\"，每一道菜都在上演着精彩的故事！",
    "🚀 恭喜你启动了\"美食火箭\"，准备开始一场味觉的太空旅行！",
];

/// A canned fictional menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackupMenuItem {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
}

pub const BACKUP_MENU: [BackupMenuItem; 3] = [
    BackupMenuItem {
        name: "彩虹独角兽汉堡",
        description: "由独角兽的眼泪和彩虹糖霜制成的魔法汉堡，每一口都能品尝到不同的味道",
        price: "¥99",
    },
    BackupMenuItem {
        name: "会唱歌的意大利面",
        description: "当面条碰到你的舌头时，会播放意大利歌剧选段",
        price: "¥88",
    },
    BackupMenuItem {
        name: "时间旅行汤",
        description: "喝一口就能回到童年的味道，配有时间胶囊装饰",
        price: "¥128",
    },
];

/// Elaboration per wheel category, keyed by category name
pub const FOOD_ELABORATIONS: [(&str, &str); 12] = [
    ("火锅", "推荐尝试麻辣火锅，配上新鲜的羊肉片和豆腐，再来一瓶冰啤酒，完美！"),
    ("烧烤", "羊肉串配孜然粉，再来点烤韭菜和烤茄子，最后来瓶冰镇可乐！"),
    ("日料", "三文鱼寿司配上芥末酱油，再来一碗味噌汤，清爽又健康！"),
    ("川菜", "麻婆豆腐配米饭，再来一份宫保鸡丁，辣得过瘾！"),
    ("粤菜", "白切鸡配姜葱酱，再来一份蒸蛋羹，清淡养生！"),
    ("西餐", "牛排配红酒，再来一份凯撒沙拉，浪漫又美味！"),
    ("韩料", "石锅拌饭配泡菜，再来一份烤肉，韩式风味十足！"),
    ("甜品", "提拉米苏配咖啡，再来一份马卡龙，甜蜜时光！"),
    ("快餐", "汉堡配薯条，再来一杯奶昔，经典搭配！"),
    ("素食", "蔬菜沙拉配坚果，再来一份豆腐汤，健康美味！"),
    ("海鲜", "清蒸鱼配柠檬，再来一份蒜蓉扇贝，鲜美无比！"),
    ("小吃", "小笼包配醋，再来一份豆浆，传统美味！"),
];

pub const GENERIC_ELABORATION: &str = "这个选择很棒！好好享受你的美食时光吧！";

/// Backup elaboration for a wheel category name
pub fn elaboration_for(name: &str) -> &'static str {
    FOOD_ELABORATIONS
        .iter()
        .find(|(food, _)| *food == name)
        .map(|(_, text)| *text)
        .unwrap_or(GENERIC_ELABORATION)
}

/// The backup pool for a generation category
pub fn pool(category: GenerationCategory) -> Vec<&'static str> {
    match category {
        GenerationCategory::Joke => BACKUP_JOKES.to_vec(),
        GenerationCategory::Fact => BACKUP_FACTS.to_vec(),
        GenerationCategory::EasterEgg => BACKUP_EASTER_EGGS.to_vec(),
        GenerationCategory::FictionalMenu => BACKUP_MENU.iter().map(|item| item.name).collect(),
        GenerationCategory::RandomFood => FOOD_ELABORATIONS.iter().map(|(_, text)| *text).collect(),
    }
}

/// Uniformly pick one entry of the category's pool
pub fn pick(category: GenerationCategory) -> &'static str {
    pool(category)
        .choose(&mut rand::rng())
        .copied()
        .unwrap_or(GENERIC_ELABORATION)
}
