//! The standard chart of accounts for public interest corporations,
//! following the revised accounting standard: cash-basis receipts and
//! disbursements are kept next to the accrual-basis activity statement,
//! and each cash-basis account lists the profit/loss accounts it expands
//! to.

use crate::account_categories::AccountCategory;
use crate::accounts::{AccountNode, DisplayTab};
use crate::taxonomy::{CategoryTree, Taxonomy};

impl Default for Taxonomy {
    fn default() -> Self {
        Taxonomy::new(vec![
            assets(),
            liabilities(),
            net_assets(),
            cash_income(),
            cash_expense(),
            revenue(),
            expenses(),
        ])
    }
}

fn assets() -> CategoryTree {
    CategoryTree::new(
        AccountCategory::Asset,
        vec![
            AccountNode::new("010000", "流動資産", "1100")
                .with_children(vec![
                    AccountNode::new("010100", "現金預金", "1110")
                        .with_children(vec![
                            AccountNode::new("010101", "小口現金", "1111")
                                .set_fund_like(true),
                            AccountNode::new("010111", "現金", "1112")
                                .set_fund_like(true),
                            AccountNode::new("010131", "普通預金 三菱UFJ銀行 東京営業部", "1114")
                                .set_fund_like(true)
                                .with_children(vec![
                                    AccountNode::new(
                                        "01013101",
                                        "普通預金 三菱UFJ銀行 東京営業部",
                                        "1114",
                                    )
                                    .set_detail_type_code("010131")
                                    .set_fund_like(true),
                                ]),
                            AccountNode::new("010132", "普通預金 三井住友銀行 新宿支店", "1114")
                                .set_fund_like(true)
                                .with_children(vec![
                                    AccountNode::new(
                                        "01013201",
                                        "普通預金 三井住友銀行 新宿支店",
                                        "1114",
                                    )
                                    .set_detail_type_code("010132")
                                    .set_fund_like(true),
                                    AccountNode::new(
                                        "01013215",
                                        "普通預金 三井住友銀行 新宿支店",
                                        "1114",
                                    )
                                    .set_secondary_label("周年事業積立資産")
                                    .set_detail_type_code("010132")
                                    .set_fund_like(true),
                                ]),
                            AccountNode::new("010162", "定期預金 三井住友銀行 新宿支店", "1119")
                                .set_fund_like(true)
                                .with_children(vec![
                                    AccountNode::new(
                                        "01016211",
                                        "定期預金 三井住友銀行 新宿支店",
                                        "1119",
                                    )
                                    .set_secondary_label("基本財産")
                                    .set_detail_type_code("010132")
                                    .set_fund_like(true),
                                ]),
                        ]),
                    AccountNode::new("010900", "未収金", "1120"),
                    AccountNode::new("011100", "有価証券", "1150"),
                    AccountNode::new("013500", "仮払金", "1170"),
                    AccountNode::new("014100", "前払費用", "1160"),
                    AccountNode::new("019100", "会計区分間貸借勘定", "1170"),
                ]),
            AccountNode::new("020000", "有形固定資産", "1200")
                .with_children(vec![
                    AccountNode::new("020300", "建物", "1200")
                        .with_children(vec![
                            AccountNode::new("020301", "建物", "1212"),
                        ]),
                    AccountNode::new("020400", "建物減価償却累計額", "1220")
                        .with_children(vec![
                            AccountNode::new("020401", "建物減価償却累計額", "1220"),
                        ]),
                    AccountNode::new("020900", "車両運搬具", "1212")
                        .with_children(vec![
                            AccountNode::new("020901", "車両運搬具", "1212"),
                        ]),
                    AccountNode::new("021000", "車両運搬具減価償却累計額", "1220")
                        .with_children(vec![
                            AccountNode::new("021001", "車両運搬具減価償却累計額", "1220"),
                        ]),
                    AccountNode::new("021300", "什器備品", "1212")
                        .with_children(vec![
                            AccountNode::new("021301", "什器備品", "1212"),
                        ]),
                    AccountNode::new("021400", "什器備品減価償却累計額", "1220")
                        .with_children(vec![
                            AccountNode::new("021401", "什器備品減価償却累計額", "1220"),
                        ]),
                    AccountNode::new("022100", "土地", "1211")
                        .with_children(vec![
                            AccountNode::new("022101", "土地", "1211"),
                        ]),
                ]),
            AccountNode::new("030000", "無形固定資産", "1300")
                .with_children(vec![
                    AccountNode::new("030300", "ソフトウェア", "1332")
                        .with_children(vec![
                            AccountNode::new("030301", "ソフトウェア", "1332"),
                        ]),
                    AccountNode::new("030400", "ソフトウェア減価償却累計額", "1360")
                        .with_children(vec![
                            AccountNode::new("030401", "ソフトウェア減価償却累計額", "1360"),
                        ]),
                ]),
            AccountNode::new("040000", "その他固定資産", "1300")
                .with_children(vec![
                    AccountNode::new("040100", "長期性預金", "1359")
                        .with_children(vec![
                            AccountNode::new("040101", "定期預金 三井住友銀行 新宿支店", "1359")
                                .with_children(vec![
                                    AccountNode::new(
                                        "040111",
                                        "定期預金 三井住友銀行 新宿支店",
                                        "1359",
                                    )
                                    .set_secondary_label("基本財産")
                                    .set_detail_type_code("040101"),
                                ]),
                        ]),
                    AccountNode::new("045100", "投資有価証券", "1341")
                        .with_children(vec![
                            AccountNode::new("045101", "投資有価証券", "1341")
                                .with_children(vec![
                                    AccountNode::new("04510111", "投資有価証券", "1341")
                                        .set_secondary_label("減価償却引当資産")
                                        .set_detail_type_code("045101"),
                                    AccountNode::new("04510113", "投資有価証券", "1341")
                                        .set_secondary_label("退職給付引当資産")
                                        .set_detail_type_code("045101"),
                                ]),
                        ]),
                    AccountNode::new("047800", "敷金", "1342"),
                ]),
        ],
    )
}

fn liabilities() -> CategoryTree {
    CategoryTree::new(
        AccountCategory::Liability,
        vec![
            AccountNode::new("060000", "流動負債", "1500")
                .with_children(vec![
                    AccountNode::new("060100", "未払金", "1510"),
                    AccountNode::new("062200", "未払法人税等", "1580"),
                    AccountNode::new("062500", "未払消費税等", "1510"),
                    AccountNode::new("063100", "前受金", "1570"),
                    AccountNode::new("064100", "預り金", "1570"),
                    AccountNode::new("063300", "賞与引当金", "1530")
                        .set_detail_type_code("066300"),
                    AccountNode::new("069100", "会計区分間貸借勘定", "1570"),
                ]),
            AccountNode::new("070000", "固定負債", "1600")
                .with_children(vec![
                    AccountNode::new("070100", "長期借入金", "1610"),
                    AccountNode::new("073100", "退職給付引当金", "1620"),
                    AccountNode::new("073200", "役員退職慰労引当金", "1620"),
                    AccountNode::new("079100", "会計区分間貸借勘定", "1670"),
                ]),
        ],
    )
}

fn net_assets() -> CategoryTree {
    CategoryTree::new(
        AccountCategory::NetAssets,
        vec![
            AccountNode::new("100000", "指定純資産", "1910")
                .with_children(vec![
                    AccountNode::new("100101", "国庫補助金", "1990"),
                    AccountNode::new("100301", "寄付金", "1990"),
                ]),
            AccountNode::new("105000", "一般純資産", "1920"),
            AccountNode::new("108000", "その他有価証券評価差額金", "1998")
                .with_children(vec![
                    AccountNode::new("108100", "その他有価証券評価差額金", "1998"),
                    AccountNode::new("109100", "（うち指定純資産に係る評価差額金）", "1990"),
                    AccountNode::new("109200", "（うち一般純資産に係る評価差額金）", "1990"),
                ]),
        ],
    )
}

fn cash_income() -> CategoryTree {
    CategoryTree::new(
        AccountCategory::CashIncome,
        vec![
            AccountNode::new("117000", "資産運用収入", "2119")
                .set_detail_type_code("110000")
                .with_children(vec![
                    AccountNode::new("117100", "受取利息収入", "2119"),
                    AccountNode::new("117200", "受取配当金収入", "2119"),
                ]),
            AccountNode::new("130000", "会費収入", "2119")
                .with_children(vec![
                    AccountNode::new("130100", "正会員会費収入", "2119"),
                    AccountNode::new("130200", "特別会員会費収入", "2119"),
                    AccountNode::new("130300", "賛助会員会費収入", "2119"),
                ]),
            AccountNode::new("140000", "事業収入", "2119")
                .with_children(vec![
                    AccountNode::new("140100", "調査研究事業収入", "2119")
                        .set_expands_to(&["540100"]),
                    AccountNode::new("145100", "広報啓発事業収入", "2119")
                        .set_expands_to(&["545100"]),
                    AccountNode::new("147100", "講座事業収入", "2119")
                        .set_expands_to(&["547100"]),
                ]),
            AccountNode::new("210000", "補助金等収入", "2119"),
            AccountNode::new("220000", "寄付金収入", "2119"),
            AccountNode::new("230000", "雑収入", "2119"),
            AccountNode::new("240000", "他会計からの繰入金収入", "2118"),
            AccountNode::new("270000", "固定資産売却収入", "2121"),
            AccountNode::new("277000", "有価証券売却収入", "2121"),
            AccountNode::new("280000", "使途制約のある資産の取崩収入", "2121"),
            AccountNode::new("287000", "その他投資活動収入", "2122"),
            AccountNode::new("289000", "他会計貸付金戻り収入", "2182"),
            AccountNode::new("319000", "他会計借入金収入", "2182"),
            AccountNode::new("320000", "前期繰越収支差額", "2192"),
        ],
    )
}

fn cash_expense() -> CategoryTree {
    CategoryTree::new(
        AccountCategory::CashExpense,
        vec![
            AccountNode::new("330000", "事業費支出", "2219")
                .with_children(vec![
                    AccountNode::new("330100", "役員報酬支出", "2219")
                        .set_expands_to(&["760100"]),
                    AccountNode::new("330300", "給料手当支出", "2219")
                        .set_expands_to(&["760300"]),
                    AccountNode::new("330400", "臨時雇賃金支出", "2219")
                        .set_expands_to(&["760400"]),
                    AccountNode::new("330700", "退職給付支出", "2219")
                        .set_expands_to(&["760700"]),
                    AccountNode::new("330800", "役員退職慰労金支出", "2219")
                        .set_expands_to(&["760800"]),
                    AccountNode::new("330900", "福利厚生費支出", "2219")
                        .set_expands_to(&["760900"]),
                    AccountNode::new("331800", "会議費支出", "2219")
                        .set_expands_to(&["761800"]),
                    AccountNode::new("331900", "旅費交通費支出", "2219")
                        .set_expands_to(&["761900"]),
                    AccountNode::new("332100", "通信運搬費支出", "2219")
                        .set_expands_to(&["762100"]),
                    AccountNode::new("332300", "消耗什器備品費支出", "2219")
                        .set_expands_to(&["762300"]),
                    AccountNode::new("332500", "消耗品費支出", "2219")
                        .set_expands_to(&["762500"]),
                    AccountNode::new("332700", "修繕費支出", "2219")
                        .set_expands_to(&["762700"]),
                    AccountNode::new("332900", "印刷製本費支出", "2219")
                        .set_expands_to(&["762900"]),
                    AccountNode::new("333100", "燃料費支出", "2219")
                        .set_expands_to(&["763100"]),
                    AccountNode::new("333300", "光熱水料費支出", "2219")
                        .set_expands_to(&["763300"]),
                    AccountNode::new("333500", "賃借料支出", "2219")
                        .set_expands_to(&["763500"]),
                    AccountNode::new("333700", "保険料支出", "2219")
                        .set_expands_to(&["763700"]),
                    AccountNode::new("333900", "諸謝金支出", "2219")
                        .set_expands_to(&["763900"]),
                    AccountNode::new("334100", "租税公課支出", "2219")
                        .set_expands_to(&["764100"]),
                    AccountNode::new("334300", "負担金支出", "2219")
                        .set_expands_to(&["764300"]),
                    AccountNode::new("334500", "助成金支出", "2219")
                        .set_expands_to(&["764500"]),
                    AccountNode::new("334600", "前払金支出", "2241"),
                    AccountNode::new("334700", "寄付金支出", "2219")
                        .set_expands_to(&["764700"]),
                    AccountNode::new("334900", "委託費支出", "2219")
                        .set_expands_to(&["764900"]),
                    AccountNode::new("335100", "手数料支出", "2219")
                        .set_expands_to(&["765100"]),
                ]),
            AccountNode::new("400000", "管理費支出", "2219")
                .with_children(vec![
                    AccountNode::new("400100", "役員報酬支出", "2219")
                        .set_expands_to(&["830100"]),
                    AccountNode::new("400300", "給料手当支出", "2219")
                        .set_expands_to(&["830300"]),
                    AccountNode::new("400400", "臨時雇賃金支出", "2219")
                        .set_expands_to(&["830400"]),
                    AccountNode::new("400700", "退職給付支出", "2219")
                        .set_expands_to(&["830700"]),
                    AccountNode::new("400800", "役員退職慰労金支出", "2219")
                        .set_expands_to(&["830800"]),
                    AccountNode::new("400900", "福利厚生費支出", "2219")
                        .set_expands_to(&["830900"]),
                    AccountNode::new("401800", "会議費支出", "2219")
                        .set_expands_to(&["831800"]),
                    AccountNode::new("401900", "旅費交通費支出", "2219")
                        .set_expands_to(&["831900"]),
                    AccountNode::new("402100", "通信運搬費支出", "2219")
                        .set_expands_to(&["832100"]),
                    AccountNode::new("402300", "消耗什器備品費支出", "2219")
                        .set_expands_to(&["832300"]),
                    AccountNode::new("402500", "消耗品費支出", "2219")
                        .set_expands_to(&["832500"]),
                    AccountNode::new("402700", "修繕費支出", "2219")
                        .set_expands_to(&["832700"]),
                    AccountNode::new("402900", "印刷製本費支出", "2219")
                        .set_expands_to(&["832900"]),
                    AccountNode::new("403100", "燃料費支出", "2219")
                        .set_expands_to(&["833100"]),
                    AccountNode::new("403300", "光熱水料費支出", "2219")
                        .set_expands_to(&["833300"]),
                    AccountNode::new("403500", "賃借料支出", "2219")
                        .set_expands_to(&["833500"]),
                    AccountNode::new("403700", "保険料支出", "2219")
                        .set_expands_to(&["833700"]),
                    AccountNode::new("403900", "諸謝金支出", "2219")
                        .set_expands_to(&["833900"]),
                    AccountNode::new("404100", "租税公課支出", "2219")
                        .set_expands_to(&["834100"]),
                    AccountNode::new("404300", "負担金支出", "2219")
                        .set_expands_to(&["834300"]),
                    AccountNode::new("404500", "助成金支出", "2219")
                        .set_expands_to(&["834500"]),
                    AccountNode::new("404700", "寄付金支出", "2219")
                        .set_expands_to(&["834700"]),
                    AccountNode::new("404900", "委託費支出", "2219")
                        .set_expands_to(&["834900"]),
                    AccountNode::new("405100", "手数料支出", "2219")
                        .set_expands_to(&["835100"]),
                ]),
            AccountNode::new("410000", "他会計への繰入金支出", "2218"),
            AccountNode::new("415000", "その他支出", "2269"),
            AccountNode::new("416000", "法人税、住民税及び事業税支出", "2219"),
            AccountNode::new("420000", "基本財産取得支出", "2220"),
            AccountNode::new("430000", "特定資産取得支出", "2230"),
            AccountNode::new("440000", "固定資産取得支出", "2220"),
            AccountNode::new("447000", "有価証券取得支出", "2220"),
            AccountNode::new("450000", "使途制約のある資産の取得支出", "2230"),
            AccountNode::new("457000", "その他投資活動支出", "2241"),
            AccountNode::new("459000", "他会計貸付金支出", "2282"),
            AccountNode::new("479000", "他会計借入金返済支出", "2282"),
        ],
    )
}

fn revenue() -> CategoryTree {
    CategoryTree::new(
        AccountCategory::Revenue,
        vec![
            AccountNode::new("517000", "資産運用益", "3119"),
            AccountNode::new("520000", "受取入会金", "3119"),
            AccountNode::new("530000", "受取会費", "3119"),
            AccountNode::new("540000", "事業収益", "3119")
                .with_children(vec![
                    AccountNode::new("540100", "調査研究事業収益", "3119"),
                    AccountNode::new("545100", "広報啓発事業収益", "3119"),
                    AccountNode::new("547100", "講座事業収益", "3119"),
                ]),
            AccountNode::new("610000", "受取補助金等", "3119"),
            AccountNode::new("620000", "受取負担金", "3119"),
            AccountNode::new("630000", "受取寄付金", "3119"),
            AccountNode::new("635000", "引当金取崩額", "3142"),
            AccountNode::new("638000", "為替差益", "3119"),
            AccountNode::new("640000", "雑収益", "3119"),
            AccountNode::new("670000", "固定資産売却益", "3121"),
            AccountNode::new("680000", "投資有価証券売却益", "3121"),
            AccountNode::new("699000", "投資有価証券受贈益", "3130"),
            AccountNode::new("700000", "他会計からの繰入額", "3118"),
            AccountNode::new("715000", "引当金取崩額", "3142"),
            AccountNode::new("720000", "その他収益", "3122"),
            AccountNode::new("740100", "その他有価証券評価差額金", "3179")
                .set_secondary_label("（評価益）")
                .set_detail_type_code("740000")
                .set_display_tab(DisplayTab::NetAssetsProfitLoss),
        ],
    )
}

fn expenses() -> CategoryTree {
    CategoryTree::new(
        AccountCategory::Expense,
        vec![
            AccountNode::new("760000", "事業費", "3219")
                .with_children(vec![
                    AccountNode::new("760100", "役員報酬", "3219"),
                    AccountNode::new("760300", "給料手当", "3219"),
                    AccountNode::new("760400", "臨時雇賃金", "3219"),
                    AccountNode::new("760500", "賞与引当金繰入額", "3262"),
                    AccountNode::new("760700", "退職給付費用", "3219"),
                    AccountNode::new("760800", "役員退職慰労引当金繰入額", "3262"),
                    AccountNode::new("760900", "福利厚生費", "3219"),
                    AccountNode::new("761800", "会議費", "3219"),
                    AccountNode::new("761900", "旅費交通費", "3219"),
                    AccountNode::new("762100", "通信運搬費", "3219"),
                    AccountNode::new("762200", "減価償却費", "3251"),
                    AccountNode::new("762203", "建物減価償却費", "3251"),
                    AccountNode::new("762205", "建物付属設備減価償却費", "3251"),
                    AccountNode::new("762207", "構築物減価償却費", "3251"),
                    AccountNode::new("762209", "車両運搬具減価償却費", "3251"),
                    AccountNode::new("762211", "機械及び装置減価償却費", "3251"),
                    AccountNode::new("762213", "什器備品減価償却費", "3251"),
                    AccountNode::new("762285", "ソフトウェア償却費", "3252"),
                    AccountNode::new("762300", "消耗什器備品費", "3219"),
                    AccountNode::new("762500", "消耗品費", "3219"),
                    AccountNode::new("762700", "修繕費", "3219"),
                    AccountNode::new("762800", "修繕引当金繰入額", "3262"),
                    AccountNode::new("762900", "印刷製本費", "3219"),
                    AccountNode::new("763100", "燃料費", "3219"),
                    AccountNode::new("763300", "光熱水料費", "3219"),
                    AccountNode::new("763500", "賃借料", "3219"),
                    AccountNode::new("763700", "保険料", "3219"),
                    AccountNode::new("763900", "諸謝金", "3219"),
                    AccountNode::new("764100", "租税公課", "3219"),
                    AccountNode::new("764300", "支払負担金", "3219"),
                    AccountNode::new("764500", "支払助成金", "3219"),
                    AccountNode::new("764700", "支払寄付金", "3219"),
                    AccountNode::new("764900", "委託費", "3219"),
                    AccountNode::new("765100", "支払手数料", "3219"),
                ]),
            AccountNode::new("830000", "管理費", "3219")
                .with_children(vec![
                    AccountNode::new("830100", "役員報酬", "3219"),
                    AccountNode::new("830300", "給料手当", "3219"),
                    AccountNode::new("830400", "臨時雇賃金", "3219"),
                    AccountNode::new("830500", "賞与引当金繰入額", "3262"),
                    AccountNode::new("830700", "退職給付費用", "3219"),
                    AccountNode::new("830800", "役員退職慰労引当金繰入額", "3262"),
                    AccountNode::new("830900", "福利厚生費", "3219"),
                    AccountNode::new("831800", "会議費", "3219"),
                    AccountNode::new("831900", "旅費交通費", "3219"),
                    AccountNode::new("832100", "通信運搬費", "3219"),
                    AccountNode::new("832200", "減価償却費", "3251"),
                    AccountNode::new("832203", "建物減価償却費", "3251"),
                    AccountNode::new("832205", "建物付属設備減価償却費", "3251"),
                    AccountNode::new("832207", "構築物減価償却費", "3251"),
                    AccountNode::new("832209", "車両運搬具減価償却費", "3251"),
                    AccountNode::new("832211", "機械及び装置減価償却費", "3251"),
                    AccountNode::new("832213", "什器備品減価償却費", "3251"),
                    AccountNode::new("832285", "ソフトウェア償却費", "3252"),
                    AccountNode::new("832300", "消耗什器備品費", "3219"),
                    AccountNode::new("832500", "消耗品費", "3219"),
                    AccountNode::new("832700", "修繕費", "3219"),
                    AccountNode::new("832800", "修繕引当金繰入額", "3262"),
                    AccountNode::new("832900", "印刷製本費", "3219"),
                    AccountNode::new("833100", "燃料費", "3219"),
                    AccountNode::new("833300", "光熱水料費", "3219"),
                    AccountNode::new("833500", "賃借料", "3219"),
                    AccountNode::new("833700", "保険料", "3219"),
                    AccountNode::new("833900", "諸謝金", "3219"),
                    AccountNode::new("834100", "租税公課", "3219"),
                    AccountNode::new("834300", "支払負担金", "3219"),
                    AccountNode::new("834500", "支払助成金", "3219"),
                    AccountNode::new("834700", "支払寄付金", "3219"),
                    AccountNode::new("834900", "委託費", "3219"),
                    AccountNode::new("835100", "支払手数料", "3219"),
                ]),
            AccountNode::new("869000", "法人税、住民税及び事業税", "3262"),
            AccountNode::new("869600", "法人税等調整額", "3262"),
            AccountNode::new("880000", "固定資産売却損", "3179"),
            AccountNode::new("886000", "投資有価証券売却損", "3232"),
            AccountNode::new("888000", "子会社株式売却損", "3232"),
            AccountNode::new("889000", "関連会社株式売却損", "3232"),
            AccountNode::new("890000", "固定資産除却損", "3241"),
            AccountNode::new("895000", "投資有価証券評価損", "3279"),
            AccountNode::new("899000", "災害損失", "3242"),
            AccountNode::new("900000", "他会計への繰出額", "3218"),
            AccountNode::new("915000", "引当金繰入額", "3262"),
            AccountNode::new("920000", "棚卸資産減耗損", "3272"),
            AccountNode::new("925000", "棚卸資産評価損", "3272"),
            AccountNode::new("927000", "雑損失", "3271"),
            AccountNode::new("930000", "固定資産減損損失", "3241"),
            AccountNode::new("938000", "過年度修正損", "3219"),
            AccountNode::new("959000", "指定純資産から一般純資産への振替額", "3291")
                .set_display_tab(DisplayTab::NetAssetsProfitLoss),
            AccountNode::new("960100", "その他有価証券評価差額金", "3279")
                .set_secondary_label("（評価損）")
                .set_detail_type_code("960000")
                .set_display_tab(DisplayTab::NetAssetsProfitLoss),
        ],
    )
}
